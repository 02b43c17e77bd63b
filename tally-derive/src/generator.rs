use proc_macro2::TokenStream;
use quote::quote;

use crate::schema::Schema;

pub fn generate_record_impl(schema: &Schema) -> TokenStream {
    let name = &schema.name;
    let vis = &schema.vis;
    let struct_attrs = &schema.serde_attrs;
    let collection = &schema.collection;
    let key = &schema.key;
    let created = &schema.created;

    let draft_type = syn::Ident::new(&format!("{name}Draft"), name.span());
    let patch_type = syn::Ident::new(&format!("{name}Patch"), name.span());

    let field_names: Vec<_> = schema.fields.iter().map(|f| &f.name).collect();
    let field_types: Vec<_> = schema.fields.iter().map(|f| &f.ty).collect();
    let field_attrs: Vec<_> = schema
        .fields
        .iter()
        .map(|f| {
            let attrs = &f.serde_attrs;
            quote! { #(#attrs)* }
        })
        .collect();

    let draft_doc = format!("Caller-supplied fields of a new [`{name}`].");
    let patch_doc = format!("Partial update of a [`{name}`]; `None` keeps the stored value.");

    let expanded = quote! {
        #[doc = #draft_doc]
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #(#struct_attrs)*
        #vis struct #draft_type {
            #(
                #field_attrs
                pub #field_names: #field_types,
            )*
        }

        #[doc = #patch_doc]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #(#struct_attrs)*
        #vis struct #patch_type {
            #(
                #field_attrs
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub #field_names: ::core::option::Option<#field_types>,
            )*
        }

        impl ::core::convert::From<#draft_type> for #patch_type {
            fn from(draft: #draft_type) -> Self {
                Self {
                    #(#field_names: ::core::option::Option::Some(draft.#field_names),)*
                }
            }
        }

        impl ::tally::Record for #name {
            const COLLECTION: &'static str = #collection;
            type Draft = #draft_type;
            type Patch = #patch_type;

            fn id(&self) -> ::tally::RecordId {
                self.#key
            }

            fn created_at(&self) -> ::tally::Timestamp {
                self.#created
            }

            fn from_draft(
                id: ::tally::RecordId,
                created_at: ::tally::Timestamp,
                draft: Self::Draft,
            ) -> Self {
                Self {
                    #key: id,
                    #created: created_at,
                    #(#field_names: draft.#field_names,)*
                }
            }

            fn merge(&mut self, patch: Self::Patch) {
                #(
                    if let ::core::option::Option::Some(value) = patch.#field_names {
                        self.#field_names = value;
                    }
                )*
            }
        }
    };

    expanded
}
