#[cfg(test)]
mod tests {
    use crate::api::{ApiResponse, BaziData, BaziRequest, Pillar};
    use serde_json::json;

    #[test]
    fn test_request_field_names() {
        let req: BaziRequest =
            serde_json::from_str(r#"{"birthDate":"2000-01-01","birthTime":"08:15"}"#).unwrap();
        assert_eq!("2000-01-01", req.birth_date());
        assert_eq!("08:15", req.birth_time());
    }

    #[test]
    fn test_request_missing_and_null_fields() {
        let req: BaziRequest = serde_json::from_str(r#"{"birthDate":"2000-01-01"}"#).unwrap();
        assert_eq!("", req.birth_time());

        let req: BaziRequest =
            serde_json::from_str(r#"{"birthDate":null,"birthTime":null}"#).unwrap();
        assert_eq!("", req.birth_date());
        assert_eq!("", req.birth_time());
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let req: BaziRequest =
            serde_json::from_str(r#"{"birthDate":"2000-01-01","gender":"male"}"#).unwrap();
        assert_eq!(BaziRequest::new("2000-01-01", None), req);
    }

    #[test]
    fn test_request_rejects_wrong_types() {
        assert!(serde_json::from_str::<BaziRequest>(r#"{"birthDate":20000101}"#).is_err());
        assert!(serde_json::from_str::<BaziRequest>("[]").is_err());
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::<BaziData>::failure("boom")).unwrap();
        assert_eq!(json!({"success": false, "error": "boom"}), value);
    }

    #[test]
    fn test_success_envelope_omits_error() {
        let value = serde_json::to_value(ApiResponse::success(BaziData::default())).unwrap();
        assert_eq!(Some(&json!(true)), value.get("success"));
        assert!(value.get("error").is_none());
        assert!(value["data"]["pillars"]["year"].is_object());
    }

    #[test]
    fn test_pillar_combined() {
        let pillar = Pillar {
            gan: "甲".to_string(),
            zhi: "子".to_string(),
        };
        assert_eq!("甲子", pillar.combined());
        assert_eq!("", Pillar::default().combined());
    }
}
