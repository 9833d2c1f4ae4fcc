//! Integration tests for the record and enum derives.
//!
//! These exercise the generated converters the way downstream crates use
//! them: host property naming, error paths, declaration-order encoding,
//! and agreement between decoding and the pre-check predicate.

use hostbridge_core::{can_convert, decode, encode, object, Error, HostEnum, HostRecord, Value};

#[derive(Debug, Clone, PartialEq, HostRecord)]
struct Options {
    enabled: bool,
    retry_count: Option<f64>,
    label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, HostRecord)]
struct Payment {
    amount: f64,
    payee_id: String,
    #[host(rename = "withoutCVV")]
    without_cvv: Option<bool>,
    flow: Option<Options>,
}

#[derive(Debug, Clone, PartialEq, HostRecord)]
#[host(rename_all = "snake_case")]
struct SnakeRecord {
    keep_as_is: f64,
    multi_word_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, HostRecord)]
struct Keyworded {
    r#type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, HostRecord)]
struct Marker {}

#[derive(Debug, Clone, Copy, PartialEq, HostEnum)]
#[host(rename_all = "UPPERCASE")]
enum Currency {
    Uah,
    Usd,
}

#[derive(Debug, Clone, Copy, PartialEq, HostEnum)]
enum Status {
    #[host(rename = "PAYED")]
    Payed,
    Canceled,
    MobileFallback,
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_field_names_default_to_camel_case() {
        let host = object! {
            "enabled" => true,
            "retryCount" => 3.0,
        };
        let options: Options = decode(&host).unwrap();
        assert_eq!(
            options,
            Options {
                enabled: true,
                retry_count: Some(3.0),
                label: None,
            }
        );
    }

    #[test]
    fn test_field_rename_overrides_the_container_rule() {
        // camelCase would give "withoutCvv"; the explicit rename keeps the
        // host's capitalization.
        let host = object! {
            "amount" => 5.0,
            "payeeId" => "1185",
            "withoutCVV" => true,
        };
        let payment: Payment = decode(&host).unwrap();
        assert_eq!(payment.without_cvv, Some(true));

        let back = encode(&payment);
        let obj = back.as_object().unwrap();
        assert!(obj.contains_key("withoutCVV"));
        assert!(!obj.contains_key("withoutCvv"));
    }

    #[test]
    fn test_container_rename_all_snake_case() {
        let host = object! {
            "keep_as_is" => 1.0,
            "multi_word_name" => "x",
        };
        let record: SnakeRecord = decode(&host).unwrap();
        assert_eq!(record.keep_as_is, 1.0);
        assert_eq!(record.multi_word_name.as_deref(), Some("x"));

        let keys: Vec<String> = encode(&record)
            .as_object()
            .unwrap()
            .keys()
            .map(str::to_string)
            .collect();
        assert_eq!(keys, vec!["keep_as_is", "multi_word_name"]);
    }

    #[test]
    fn test_raw_identifier_maps_to_the_bare_name() {
        let host = object! { "type" => "account" };
        let record: Keyworded = decode(&host).unwrap();
        assert_eq!(record.r#type.as_deref(), Some("account"));

        let back = encode(&record);
        assert!(back.as_object().unwrap().contains_key("type"));
    }

    #[test]
    fn test_missing_required_field_is_reported_at_its_path() {
        let host = object! { "retryCount" => 1.0 };
        let err = decode::<Options>(&host).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at $.enabled: expected boolean, found undefined"
        );
    }

    #[test]
    fn test_nested_record_errors_carry_the_full_path() {
        let host = object! {
            "amount" => 10.0,
            "payeeId" => "1185",
            "flow" => object! { "enabled" => "yes" },
        };
        let err = decode::<Payment>(&host).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at $.flow.enabled: expected boolean, found string"
        );
    }

    #[test]
    fn test_non_object_input_is_rejected() {
        let Error::TypeMismatch {
            expected,
            found,
            path,
        } = decode::<Options>(&Value::Null).unwrap_err();
        assert_eq!(expected, "object");
        assert_eq!(found, "null");
        assert_eq!(path, "$");

        assert!(decode::<Options>(&Value::Number(42.0)).is_err());
        assert!(decode::<Options>(&Value::Array(vec![])).is_err());
    }

    #[test]
    fn test_unknown_properties_are_ignored() {
        let host = object! {
            "enabled" => false,
            "vendorExtension" => "opaque",
            "weight" => 11.5,
        };
        let options: Options = decode(&host).unwrap();
        assert!(!options.enabled);

        // They are not carried through either.
        let back = encode(&options);
        assert!(!back.as_object().unwrap().contains_key("vendorExtension"));
    }

    #[test]
    fn test_present_undefined_decodes_like_a_missing_property() {
        let host = object! {
            "enabled" => true,
            "label" => Value::Undefined,
        };
        let options: Options = decode(&host).unwrap();
        assert_eq!(options.label, None);
    }

    #[test]
    fn test_encoding_writes_every_property_in_declaration_order() {
        let payment = Payment {
            amount: 3.0,
            payee_id: "1185".to_string(),
            without_cvv: None,
            flow: None,
        };
        let host = encode(&payment);
        let obj = host.as_object().unwrap();

        let keys: Vec<&str> = obj.keys().collect();
        assert_eq!(keys, vec!["amount", "payeeId", "withoutCVV", "flow"]);
        // Absent options are written as explicit undefined properties.
        assert_eq!(obj.property("withoutCVV"), &Value::Undefined);
        assert_eq!(obj.property("flow"), &Value::Undefined);
    }

    #[test]
    fn test_optional_record_treats_null_as_absent() {
        assert_eq!(decode::<Option<Options>>(&Value::Null), Ok(None));
        assert_eq!(decode::<Option<Options>>(&Value::Undefined), Ok(None));
        assert!(decode::<Option<Options>>(&Value::Bool(true)).is_err());
    }

    #[test]
    fn test_predicate_agrees_with_decode() {
        let corpus = vec![
            object! { "amount" => 1.0, "payeeId" => "p" },
            object! { "amount" => 1.0, "payeeId" => "p", "extra" => true },
            object! { "payeeId" => "p" },
            object! { "amount" => "1", "payeeId" => "p" },
            object! {
                "amount" => 1.0,
                "payeeId" => "p",
                "flow" => object! { "enabled" => 1.0 },
            },
            object! {},
            Value::Undefined,
            Value::Null,
            Value::Bool(true),
            Value::Number(42.0),
            Value::String("{}".to_string()),
            Value::Array(vec![]),
        ];
        for value in corpus {
            assert_eq!(
                can_convert::<Payment>(&value),
                decode::<Payment>(&value).is_ok(),
                "predicate diverged on {value}"
            );
        }
    }

    #[test]
    fn test_record_with_no_fields_round_trips() {
        let marker: Marker = decode(&object! {}).unwrap();
        assert_eq!(marker, Marker {});
        assert_eq!(encode(&marker), object! {});

        // Still an ordinary record: unknown properties are tolerated and
        // non-objects are rejected.
        assert_eq!(decode::<Marker>(&object! { "extra" => true }), Ok(Marker {}));
        let Error::TypeMismatch { expected, path, .. } =
            decode::<Marker>(&Value::Null).unwrap_err();
        assert_eq!(expected, "object");
        assert_eq!(path, "$");
        assert!(can_convert::<Marker>(&object! {}));
        assert!(!can_convert::<Marker>(&Value::Null));
    }
}

#[cfg(test)]
mod enum_tests {
    use super::*;

    #[test]
    fn test_enum_decodes_its_wire_strings() {
        assert_eq!(
            decode::<Currency>(&Value::String("UAH".to_string())),
            Ok(Currency::Uah)
        );
        assert_eq!(
            decode::<Currency>(&Value::String("USD".to_string())),
            Ok(Currency::Usd)
        );

        // Per-variant rename wins over the container rule; the rest
        // camel-case their identifiers.
        assert_eq!(
            decode::<Status>(&Value::String("PAYED".to_string())),
            Ok(Status::Payed)
        );
        assert_eq!(
            decode::<Status>(&Value::String("canceled".to_string())),
            Ok(Status::Canceled)
        );
        assert_eq!(
            decode::<Status>(&Value::String("mobileFallback".to_string())),
            Ok(Status::MobileFallback)
        );
    }

    #[test]
    fn test_enum_encodes_back_to_the_wire_string() {
        assert_eq!(encode(&Currency::Usd), Value::String("USD".to_string()));
        assert_eq!(encode(&Status::Payed), Value::String("PAYED".to_string()));
        assert_eq!(
            encode(&Status::MobileFallback),
            Value::String("mobileFallback".to_string())
        );
    }

    #[test]
    fn test_enum_rejects_unknown_strings_by_name() {
        let err = decode::<Currency>(&Value::String("XXX".to_string())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at $: expected one of \"UAH\", \"USD\", found string \"XXX\""
        );
    }

    #[test]
    fn test_enum_rejects_non_strings() {
        let err = decode::<Currency>(&Value::Number(5.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at $: expected one of \"UAH\", \"USD\", found number"
        );
    }

    #[test]
    fn test_enum_predicate_agrees_with_decode() {
        let corpus = vec![
            Value::String("UAH".to_string()),
            Value::String("USD".to_string()),
            Value::String("uah".to_string()),
            Value::String(String::new()),
            Value::Undefined,
            Value::Null,
            Value::Number(980.0),
            Value::Bool(true),
        ];
        for value in corpus {
            assert_eq!(
                can_convert::<Currency>(&value),
                decode::<Currency>(&value).is_ok(),
                "predicate diverged on {value}"
            );
            assert_eq!(
                can_convert::<Option<Currency>>(&value),
                decode::<Option<Currency>>(&value).is_ok(),
                "optional predicate diverged on {value}"
            );
        }
    }
}
