use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Type, Visibility};

/// A field supplied by callers, carried into the generated draft and patch types.
#[derive(Clone)]
pub struct SchemaField {
    pub name: Ident,
    pub ty: Type,
    pub serde_attrs: Vec<Attribute>,
}

pub struct Schema {
    pub name: Ident,
    pub vis: Visibility,
    pub serde_attrs: Vec<Attribute>,
    pub collection: String,
    pub key: Ident,
    pub created: Ident,
    pub fields: Vec<SchemaField>,
}

impl Schema {
    pub fn from_derive_input(input: DeriveInput) -> Result<Self, TokenStream> {
        let name = input.ident;

        if !input.generics.params.is_empty() {
            return Err(fail(&name, "tally::Record cannot be derived for generic structs"));
        }

        let fields = match input.data {
            Data::Struct(ref data_struct) => &data_struct.fields,
            _ => {
                return Err(fail(&name, "tally::Record can only be derived for structs"));
            }
        };

        let field_list = match fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unnamed(_) => {
                return Err(fail(
                    &name,
                    "tally::Record doesn't support tuple structs, use named fields",
                ));
            }
            Fields::Unit => {
                return Err(fail(
                    &name,
                    "Unit structs cannot derive tally::Record as they have no fields",
                ));
            }
        };

        let collection = match input
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("collection"))
        {
            Some(attr) => attr
                .parse_args::<LitStr>()
                .map_err(|e| TokenStream::from(e.to_compile_error()))?
                .value(),
            None => format!("{}s", name.to_string().to_case(Case::Snake)),
        };

        let mut key = None;
        let mut created = None;
        let mut caller_fields = Vec::new();

        for field in field_list {
            // Named fields always carry an identifier.
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let is_key = field.attrs.iter().any(|attr| attr.path().is_ident("key"));
            let is_created = field
                .attrs
                .iter()
                .any(|attr| attr.path().is_ident("created"));

            match (is_key, is_created) {
                (true, true) => {
                    return Err(fail(
                        &ident,
                        "A field cannot be both #[key] and #[created]",
                    ));
                }
                (true, false) => {
                    if key.replace(ident.clone()).is_some() {
                        return Err(fail(&ident, "Only one field may be marked #[key]"));
                    }
                }
                (false, true) => {
                    if created.replace(ident.clone()).is_some() {
                        return Err(fail(&ident, "Only one field may be marked #[created]"));
                    }
                }
                (false, false) => caller_fields.push(SchemaField {
                    name: ident,
                    ty: field.ty.clone(),
                    serde_attrs: serde_attrs(&field.attrs),
                }),
            }
        }

        let Some(key) = key else {
            return Err(fail(&name, "Mark the record id field with #[key]"));
        };
        let Some(created) = created else {
            return Err(fail(
                &name,
                "Mark the creation timestamp field with #[created]",
            ));
        };

        Ok(Schema {
            serde_attrs: serde_attrs(&input.attrs),
            vis: input.vis,
            name,
            collection,
            key,
            created,
            fields: caller_fields,
        })
    }
}

fn serde_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .cloned()
        .collect()
}

fn fail(spanned: &Ident, message: &str) -> TokenStream {
    Error::new_spanned(spanned, message).to_compile_error().into()
}
