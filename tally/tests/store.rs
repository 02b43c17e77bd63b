mod common;

use chrono::TimeDelta;
use common::{ann, lamp, noon, store, user};
use tally::{
    Gender, Persistence, Product, ProductPatch, ProductStatus, RecordId, Role, Seeded, User,
    UserPatch,
};

#[test]
fn test_add_to_empty_users() -> anyhow::Result<()> {
    let mut store = store();

    let added = store.add::<User>(ann())?;

    let users = store.users()?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "ann@example.com");
    assert_eq!(users[0], added);
    assert_eq!(added.registration_date, noon());
    assert_eq!(store.statistics()?.female_users, 1);
    Ok(())
}

#[test]
fn test_list_of_unwritten_collection_is_empty() -> anyhow::Result<()> {
    let store = store();
    assert!(store.list::<User>()?.is_empty());
    assert!(store.list::<Product>()?.is_empty());
    assert_eq!(store.persistence().get("users")?, None);
    Ok(())
}

#[test]
fn test_ids_are_unique_within_one_instant() -> anyhow::Result<()> {
    let mut store = store();

    let ids = (0..5)
        .map(|i| store.add::<User>(user(&format!("User {i}"), Gender::Male)))
        .map(|added| added.map(|u| u.id))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(ids, (1..=5).map(RecordId).collect::<Vec<_>>());
    let listed = store.users()?.iter().map(|u| u.id).collect::<Vec<_>>();
    assert_eq!(listed, ids);
    Ok(())
}

#[test]
fn test_collections_have_independent_sequences() -> anyhow::Result<()> {
    let mut store = store();
    store.add::<User>(ann())?;
    store.add::<User>(user("Bob Stone", Gender::Male))?;
    let product = store.add::<Product>(lamp())?;

    assert_eq!(product.id, RecordId(1));
    Ok(())
}

#[test]
fn test_get_by_id() -> anyhow::Result<()> {
    let mut store = store();
    let added = store.add::<Product>(lamp())?;

    assert_eq!(store.get::<Product>(added.id)?, Some(added));
    assert_eq!(store.get::<Product>(RecordId(99))?, None);
    Ok(())
}

#[test]
fn test_update_merges_supplied_fields() -> anyhow::Result<()> {
    let mut store = store();
    let before = store.add::<User>(ann())?;
    store.clock().advance(TimeDelta::days(3));

    let updated = store
        .update::<User>(
            before.id,
            UserPatch {
                role: Some(Role::Moderator),
                ..Default::default()
            },
        )?
        .expect("user exists");

    let expected = User {
        role: Role::Moderator,
        ..before.clone()
    };
    assert_eq!(updated, expected);
    assert_eq!(store.get::<User>(before.id)?, Some(expected));
    Ok(())
}

#[test]
fn test_update_from_full_form_keeps_id_and_timestamp() -> anyhow::Result<()> {
    let mut store = store();
    let before = store.add::<Product>(lamp())?;
    store.clock().advance(TimeDelta::hours(5));

    let mut form = lamp();
    form.stock = 0;
    form.status = ProductStatus::OutOfStock;
    form.description = None;

    let updated = store
        .update::<Product>(before.id, ProductPatch::from(form))?
        .expect("product exists");

    assert_eq!(updated.id, before.id);
    assert_eq!(updated.date_added, before.date_added);
    assert_eq!(updated.stock, 0);
    assert_eq!(updated.status, ProductStatus::OutOfStock);
    assert_eq!(updated.description, None);
    Ok(())
}

#[test]
fn test_update_missing_id_writes_nothing() -> anyhow::Result<()> {
    let mut store = store();
    store.add::<User>(ann())?;
    let payload = store.persistence().get("users")?;

    let result = store.update::<User>(
        RecordId(42),
        UserPatch {
            name: Some("Nobody".into()),
            ..Default::default()
        },
    )?;

    assert_eq!(result, None);
    assert_eq!(store.persistence().get("users")?, payload);
    Ok(())
}

#[test]
fn test_delete() -> anyhow::Result<()> {
    let mut store = store();
    let first = store.add::<User>(ann())?;
    let second = store.add::<User>(user("Bob Stone", Gender::Male))?;

    store.delete::<User>(first.id)?;
    assert_eq!(store.get::<User>(first.id)?, None);
    assert_eq!(store.users()?, vec![second.clone()]);

    // Deleting again is a no-op.
    store.delete::<User>(first.id)?;
    assert_eq!(store.users()?, vec![second]);
    Ok(())
}

#[test]
fn test_delete_on_unwritten_collection_keeps_it_absent() -> anyhow::Result<()> {
    let mut store = store();
    store.delete::<Product>(RecordId(1))?;
    assert_eq!(store.persistence().get("products")?, None);
    Ok(())
}

#[test]
fn test_deleted_ids_are_never_reused() -> anyhow::Result<()> {
    let mut store = store();
    store.add::<User>(ann())?;
    let newest = store.add::<User>(user("Bob Stone", Gender::Male))?;
    store.delete::<User>(newest.id)?;

    let next = store.add::<User>(user("Cara Moss", Gender::Female))?;
    assert_eq!(next.id, RecordId(3));
    Ok(())
}

#[test]
fn test_reset_is_repeatable() -> anyhow::Result<()> {
    let mut store = store();
    store.add::<Product>(lamp())?;

    store.reset::<Product>()?;
    let first = store.products()?;
    store.reset::<Product>()?;
    let second = store.products()?;

    assert_eq!(first, Product::seed(noon()));
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_ids_after_reset_continue_past_seed_and_history() -> anyhow::Result<()> {
    let mut store = store();
    for i in 0..12 {
        store.add::<User>(user(&format!("User {i}"), Gender::Male))?;
    }
    store.reset::<User>()?;

    let next = store.add::<User>(ann())?;
    assert_eq!(next.id, RecordId(13));
    Ok(())
}

#[test]
fn test_bootstrap_seeds_only_absent_collections() -> anyhow::Result<()> {
    let mut store = store();
    store.add::<User>(ann())?;
    store.delete::<User>(RecordId(1))?;

    let seeded = store.bootstrap()?;

    assert_eq!(seeded, vec!["products"]);
    assert!(store.users()?.is_empty());
    assert_eq!(store.products()?.len(), 10);

    // Once written, nothing is seeded again.
    assert!(store.bootstrap()?.is_empty());
    Ok(())
}

#[test]
fn test_statistics_track_collections() -> anyhow::Result<()> {
    let mut store = store();
    store.bootstrap()?;

    let stats = store.statistics()?;
    assert_eq!(stats.total_users, store.users()?.len());
    assert_eq!(stats.total_products, 10);
    assert_eq!(stats.new_users_today, 1);
    assert_eq!(stats.new_products_today, 1);
    assert_eq!((stats.male_users, stats.female_users), (5, 5));

    store.add::<User>(ann())?;
    store.add::<Product>(lamp())?;
    let stats = store.statistics()?;
    assert_eq!(stats.total_users, 11);
    assert_eq!(stats.new_users_today, 2);
    assert_eq!(stats.new_products_today, 2);
    assert_eq!(stats.female_users, 6);

    store.clock().advance(TimeDelta::days(1));
    let stats = store.statistics()?;
    assert_eq!(stats.new_users_today, 0);
    assert_eq!(stats.new_products_today, 0);
    Ok(())
}

#[test]
fn test_recent_products() -> anyhow::Result<()> {
    let mut store = store();
    let mut added = Vec::new();
    for i in 0..10 {
        store.clock().advance(TimeDelta::minutes(i));
        let mut draft = lamp();
        draft.name = format!("Lamp {i}");
        added.push(store.add::<Product>(draft)?);
    }

    let recent = store.recent::<Product>(3)?;
    let names = recent.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Lamp 9", "Lamp 8", "Lamp 7"]);

    assert_eq!(store.recent_default::<Product>()?.len(), 5);
    // Listing order stays creation order.
    assert_eq!(store.products()?, added);
    Ok(())
}

#[test]
fn test_payload_is_human_readable_csv() -> anyhow::Result<()> {
    let mut store = store();
    store.add::<User>(ann())?;

    let payload = store.persistence().get("users")?.expect("users written");
    let mut lines = payload.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,email,gender,role,status,registrationDate")
    );
    assert!(
        lines
            .next()
            .is_some_and(|row| row.starts_with("1,Ann Lee,ann@example.com,female,user,active,2024-10-01T12:00:00"))
    );
    Ok(())
}

#[test]
fn test_deleted_seed_ids_are_never_reused() -> anyhow::Result<()> {
    let mut store = store();
    store.bootstrap()?;
    store.delete::<User>(RecordId(10))?;

    let next = store.add::<User>(ann())?;

    assert_eq!(next.id, RecordId(11));
    assert_eq!(store.get::<User>(RecordId(10))?, None);
    Ok(())
}

#[test]
fn test_ids_after_reset_continue_past_seed() -> anyhow::Result<()> {
    let mut store = store();
    store.reset::<Product>()?;
    for id in 8..=10 {
        store.delete::<Product>(RecordId(id))?;
    }

    let first = store.add::<Product>(lamp())?;
    store.reset::<Product>()?;
    let second = store.add::<Product>(lamp())?;

    assert_eq!(first.id, RecordId(11));
    assert_eq!(second.id, RecordId(12));
    Ok(())
}

#[test]
fn test_csv_keeps_non_finite_price() -> anyhow::Result<()> {
    let mut store = store();
    let mut draft = lamp();
    draft.price = f64::NAN;

    let added = store.add::<Product>(draft)?;

    let listed = store.get::<Product>(added.id)?.expect("product stored");
    assert!(listed.price.is_nan());
    Ok(())
}
