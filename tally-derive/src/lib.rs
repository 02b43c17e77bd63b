use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generator;
mod schema;

use generator::generate_record_impl;
use schema::Schema;

/// Derives `tally::Record` for a struct with named fields.
///
/// One field must be marked `#[key]` (a `tally::RecordId`) and one `#[created]`
/// (a `tally::Timestamp`). Every other field is caller-supplied and appears in the
/// generated `<Name>Draft` and `<Name>Patch` types. The persistence key defaults to
/// the snake-cased plural of the struct name and can be set with
/// `#[collection("...")]`.
#[proc_macro_derive(Record, attributes(collection, key, created))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let schema = match Schema::from_derive_input(input) {
        Ok(schema) => schema,
        Err(error) => return error,
    };

    generate_record_impl(&schema).into()
}
