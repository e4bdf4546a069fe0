use lexicon::domain::{PrimitiveKind, Record, RecordValue, Schema};
use lexicon::schema_form::{derive_fields, render_table, DescriptorKind, TableBody};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

#[derive(Clone, Debug)]
enum Decl {
    Typed(PrimitiveKind),
    Ref(String),
    Untyped,
    Bogus,
}

impl Decl {
    fn to_value(&self) -> Value {
        match self {
            Decl::Typed(kind) => json!({ "type": kind.name().to_lowercase() }),
            Decl::Ref(target) => json!({ "$ref": format!("{}.json", target), "type": "string" }),
            Decl::Untyped => json!({ "description": "free text" }),
            Decl::Bogus => json!({ "type": "Widget" }),
        }
    }

    fn expected(&self) -> DescriptorKind {
        match self {
            Decl::Typed(kind) => DescriptorKind::Primitive(*kind),
            Decl::Ref(_) => DescriptorKind::Ref,
            Decl::Untyped | Decl::Bogus => DescriptorKind::Unknown,
        }
    }
}

fn decl() -> impl Strategy<Value = Decl> {
    prop_oneof![
        prop::sample::select(PrimitiveKind::ALL.to_vec()).prop_map(Decl::Typed),
        "[A-Z][a-z]{0,6}".prop_map(Decl::Ref),
        Just(Decl::Untyped),
        Just(Decl::Bogus),
    ]
}

/// Distinct field names in reverse-sorted order, so declaration order is
/// never accidentally alphabetical
fn declarations() -> impl Strategy<Value = Vec<(String, Decl)>> {
    prop::collection::btree_set("[a-z]{1,8}", 0..12).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().rev().collect();
        let n = names.len();
        prop::collection::vec(decl(), n)
            .prop_map(move |decls| names.clone().into_iter().zip(decls).collect())
    })
}

fn schema_of(decls: &[(String, Decl)]) -> Schema {
    let mut props = Map::new();
    for (name, decl) in decls {
        props.insert(name.clone(), decl.to_value());
    }
    Schema::from_value(&json!({ "type": "object", "properties": props }))
}

proptest! {
    #[test]
    fn descriptors_follow_declarations(decls in declarations()) {
        let fields = derive_fields(&schema_of(&decls));

        prop_assert_eq!(fields.len(), decls.len());
        for (field, (name, decl)) in fields.iter().zip(&decls) {
            prop_assert_eq!(&field.name, name);
            prop_assert_eq!(field.kind, decl.expected());
            if let Decl::Ref(target) = decl {
                prop_assert_eq!(field.ref_target.as_deref(), Some(target.as_str()));
            } else {
                prop_assert!(field.ref_target.is_none());
            }
        }
    }

    #[test]
    fn empty_table_has_one_placeholder_row(decls in declarations()) {
        let table = render_table(&schema_of(&decls), &[]);

        prop_assert_eq!(table.columns.len(), decls.len());
        prop_assert_eq!(table.row_count(), 1);
        prop_assert_eq!(table.body, TableBody::Placeholder { colspan: decls.len().max(1) });
    }

    #[test]
    fn table_rendering_is_repeatable(
        decls in declarations(),
        texts in prop::collection::vec("[ -~]{0,10}", 0..6),
    ) {
        let schema = schema_of(&decls);
        let records: Vec<Record> = texts
            .iter()
            .map(|text| {
                decls
                    .iter()
                    .step_by(2)
                    .map(|(name, _)| (name.clone(), RecordValue::Text(text.clone())))
                    .collect()
            })
            .collect();

        let first = render_table(&schema, &records);
        let second = render_table(&schema, &records);
        prop_assert_eq!(&first, &second);

        if !records.is_empty() {
            prop_assert_eq!(first.row_count(), records.len());
            for row in first.rows() {
                prop_assert_eq!(row.len(), decls.len());
                for (i, cell) in row.iter().enumerate() {
                    if i % 2 == 1 {
                        prop_assert_eq!(cell.as_str(), "");
                    }
                }
            }
        }
    }
}
