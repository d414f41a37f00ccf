//! properties.rs
//!
//! Property tests for the conversion invariants that must hold for any
//! input shape: attached-field order preservation under partitioning, and
//! style stability through a wire round trip (minus the documented
//! ACCEPTANCE case).

use proptest::prelude::*;

use esig_core::prelude::*;

fn input_field(name: &str) -> ApiField {
    ApiField {
        name: name.to_string(),
        field_type: FieldType::Input,
        subtype: FieldSubtype::Textfield,
        ..ApiField::default()
    }
}

fn signature_field_wire() -> ApiField {
    ApiField {
        name: "sig".to_string(),
        field_type: FieldType::Signature,
        subtype: FieldSubtype::Fullname,
        page: 1,
        ..ApiField::default()
    }
}

fn one_role_package() -> Package {
    Package {
        roles: vec![Role {
            id: "role-1".to_string(),
            signers: vec![Signer {
                email: "ann@example.com".to_string(),
                ..Signer::default()
            }],
            ..Role::default()
        }],
        ..Package::default()
    }
}

fn non_lossy_style() -> impl Strategy<Value = SignatureStyle> {
    prop_oneof![
        Just(SignatureStyle::FullName),
        Just(SignatureStyle::HandDrawn),
        Just(SignatureStyle::Initials),
    ]
}

proptest! {
    /// For any list of N input fields and any insertion point of the one
    /// signature field, the domain signature carries exactly the N input
    /// fields in their original relative order.
    #[test]
    fn partition_preserves_attached_field_order(
        names in proptest::collection::vec("[a-z]{1,8}", 0..8),
        sig_pos_seed in 0usize..8,
    ) {
        let mut fields: Vec<ApiField> = names.iter().map(|n| input_field(n)).collect();
        let sig_pos = sig_pos_seed % (fields.len() + 1);
        fields.insert(sig_pos, signature_field_wire());

        let approval = Approval {
            role: "role-1".to_string(),
            fields,
            ..Approval::default()
        };

        let sig = to_domain_signature(&approval, &one_role_package()).unwrap();
        let got: Vec<_> = sig.fields.iter().map(|f| f.name.clone()).collect();
        prop_assert_eq!(got, names);
        prop_assert_eq!(sig.style, SignatureStyle::FullName);
    }

    /// Non-acceptance styles survive a domain -> wire -> domain round trip.
    #[test]
    fn style_survives_round_trip(style in non_lossy_style()) {
        let sig = Signature::for_signer("ann@example.com")
            .with_style(style)
            .on_page(1)
            .with_size(200.0, 50.0)
            .build();

        let mut emitted = to_api_approval(&sig);
        emitted.role = "role-1".to_string();

        let back = to_domain_signature(&emitted, &one_role_package()).unwrap();
        prop_assert_eq!(back.style, style);
    }

    /// Extraction placement never leaks stored geometry onto the wire.
    #[test]
    fn extraction_always_suppresses_geometry(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        w in 0.0f64..500.0,
        h in 0.0f64..500.0,
    ) {
        let sig = Signature::for_signer("ann@example.com")
            .at_position(x, y)
            .with_size(w, h)
            .enable_extraction()
            .build();

        let field = signature_field(&sig);
        prop_assert!(field.extract);
        prop_assert_eq!((field.left, field.top), (0.0, 0.0));
        prop_assert_eq!((field.width, field.height), (0.0, 0.0));
    }
}
