use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::seed_date;
use crate::{Record, RecordId, Seeded, Timestamp};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Moderator,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A dashboard account.
#[derive(Record, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[collection("users")]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[key]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub role: Role,
    pub status: UserStatus,
    #[created]
    pub registration_date: Timestamp,
}

type SeedUser = (
    &'static str,
    &'static str,
    Gender,
    Role,
    UserStatus,
    Option<(i32, u32, u32)>,
);

// A missing date means "registered today".
const SEED_USERS: [SeedUser; 10] = [
    ("John Doe", "john.doe@example.com", Gender::Male, Role::Admin, UserStatus::Active, Some((2024, 1, 15))),
    ("Jane Smith", "jane.smith@example.com", Gender::Female, Role::User, UserStatus::Active, Some((2024, 2, 20))),
    ("Michael Johnson", "michael.j@example.com", Gender::Male, Role::Moderator, UserStatus::Active, Some((2024, 3, 10))),
    ("Emily Brown", "emily.brown@example.com", Gender::Female, Role::User, UserStatus::Inactive, Some((2024, 4, 5))),
    ("David Wilson", "david.w@example.com", Gender::Male, Role::User, UserStatus::Active, Some((2024, 5, 18))),
    ("Sarah Davis", "sarah.davis@example.com", Gender::Female, Role::Moderator, UserStatus::Active, Some((2024, 6, 22))),
    ("Robert Miller", "robert.m@example.com", Gender::Male, Role::User, UserStatus::Active, Some((2024, 7, 14))),
    ("Lisa Anderson", "lisa.a@example.com", Gender::Female, Role::User, UserStatus::Active, Some((2024, 8, 30))),
    ("James Taylor", "james.t@example.com", Gender::Male, Role::User, UserStatus::Inactive, Some((2024, 9, 12))),
    ("Patricia Martinez", "patricia.m@example.com", Gender::Female, Role::User, UserStatus::Active, None),
];

impl Seeded for User {
    fn seed(now: Timestamp) -> Vec<Self> {
        SEED_USERS
            .iter()
            .zip(1..)
            .map(|(&(name, email, gender, role, status, date), id)| {
                User::from_draft(
                    RecordId(id),
                    date.map_or(now, |(y, m, d)| seed_date(now, y, m, d)),
                    UserDraft {
                        name: name.to_owned(),
                        email: email.to_owned(),
                        gender,
                        role,
                        status,
                    },
                )
            })
            .collect()
    }
}
