//! Implementation of the `#[derive(Record)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr,
};

/// Main implementation of the Record derive macro.
pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

/// Options read from `#[record(...)]` attributes.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    rename: Option<String>,
    skip: bool,
}

fn parse_options(attributes: &[Attribute]) -> syn::Result<Options> {
    let mut options = Options::default();
    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("record")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                options.rename = Some(name.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }
    Ok(options)
}

/// A field that takes part in the runtime view.
struct RecordField<'a> {
    ident: &'a Ident,
    name: String,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => &named_fields.named,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record can only be derived for structs with named fields, not tuple structs.",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record cannot be derived for unit structs (structs with no fields).",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Record can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(name, "Record cannot be derived for unions."));
        }
    };

    let type_name = parse_options(&input.attrs)?
        .rename
        .unwrap_or_else(|| name.to_string());

    let mut recorded = Vec::new();
    let mut skipped = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let options = parse_options(&field.attrs)?;
        if options.skip {
            skipped.push(ident);
        } else {
            recorded.push(RecordField {
                ident,
                name: options.rename.unwrap_or_else(|| ident.to_string()),
            });
        }
    }

    let into_value = generate_into_value(name, &input.generics, &type_name, &recorded);
    let from_value = generate_from_value(name, &input.generics, &type_name, &recorded, &skipped);

    Ok(quote! {
        #into_value
        #from_value
    })
}

fn bounded(generics: &Generics, bound: &syn::Path) -> Generics {
    let mut generics = generics.clone();
    for parameter in generics.type_params_mut() {
        parameter.bounds.push(parse_quote!(#bound));
    }
    generics
}

fn generate_into_value(
    name: &Ident,
    generics: &Generics,
    type_name: &str,
    recorded: &[RecordField<'_>],
) -> TokenStream2 {
    let generics = bounded(generics, &parse_quote!(::collecta::value::IntoValue));
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let with_fields = recorded.iter().map(|RecordField { ident, name }| {
        quote! {
            .with_field(#name, ::collecta::value::IntoValue::to_value(&self.#ident))
        }
    });

    quote! {
        impl #impl_generics ::collecta::value::IntoValue for #name #type_generics #where_clause {
            fn to_value(&self) -> ::collecta::value::Value {
                ::collecta::value::Value::Record(
                    ::collecta::value::Record::new(#type_name)
                        #(#with_fields)*
                )
            }
        }
    }
}

fn generate_from_value(
    name: &Ident,
    generics: &Generics,
    type_name: &str,
    recorded: &[RecordField<'_>],
    skipped: &[&Ident],
) -> TokenStream2 {
    let generics = bounded(generics, &parse_quote!(::collecta::value::FromValue));
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let read_fields = recorded.iter().map(|RecordField { ident, name }| {
        quote! { #ident: record.field_as(#name)?, }
    });

    quote! {
        impl #impl_generics ::collecta::value::FromValue for #name #type_generics #where_clause {
            fn from_value(
                value: ::collecta::value::Value,
            ) -> ::core::result::Result<Self, ::collecta::access::AccessError> {
                match value {
                    ::collecta::value::Value::Record(record) => {
                        record.expect_type(#type_name)?;
                        ::core::result::Result::Ok(Self {
                            #(#read_fields)*
                            #(#skipped: ::core::default::Default::default(),)*
                        })
                    }
                    other => ::core::result::Result::Err(
                        ::collecta::access::AccessError::TypeMismatch {
                            expected: #type_name,
                            found: other.kind(),
                        },
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field_attributes(input: &DeriveInput) -> Vec<Vec<Attribute>> {
        match &input.data {
            Data::Struct(data_struct) => data_struct
                .fields
                .iter()
                .map(|field| field.attrs.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    #[rstest]
    fn test_parse_options() {
        let input: DeriveInput = parse_quote! {
            struct User {
                #[record(rename = "ID")]
                id: u32,
                #[record(skip)]
                cache: Vec<u8>,
                #[serde(default)]
                name: String,
            }
        };
        let options: Vec<Options> = field_attributes(&input)
            .iter()
            .map(|attributes| parse_options(attributes).unwrap())
            .collect();
        assert_eq!(options[0].rename.as_deref(), Some("ID"));
        assert!(options[1].skip);
        assert_eq!(options[2], Options::default());
    }

    #[rstest]
    fn test_unknown_option_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct User {
                #[record(flatten)]
                id: u32,
            }
        };
        let error = expand(&input).unwrap_err();
        assert!(error.to_string().contains("rename"));
    }

    #[rstest]
    #[case(parse_quote! { enum Shape { Circle } }, "not enums")]
    #[case(parse_quote! { struct Pair(u8, u8); }, "not tuple structs")]
    #[case(parse_quote! { struct Marker; }, "unit structs")]
    #[case(parse_quote! { union Bits { a: u8 } }, "unions")]
    fn test_unsupported_shapes(#[case] input: DeriveInput, #[case] fragment: &str) {
        let error = expand(&input).unwrap_err();
        assert!(error.to_string().contains(fragment));
    }

    #[rstest]
    fn test_expansion_uses_renamed_type() {
        let input: DeriveInput = parse_quote! {
            #[record(rename = "Person")]
            struct User<T> {
                name: T,
            }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("\"Person\""));
        assert!(expanded.contains("IntoValue for User < T >"));
    }
}
