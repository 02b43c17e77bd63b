#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/default_collection.rs");
    t.pass("tests/ui/serde_attributes.rs");
}
