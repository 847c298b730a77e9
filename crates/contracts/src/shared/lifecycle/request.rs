use serde_json::{Map, Value};

/// Формат PATCH-запроса действия: последний сегмент пути и ключ поля в теле
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStyle {
    /// `PATCH <endpoint>/<id>/action`, тело `{ "action": ... }`
    Action,
    /// `PATCH <endpoint>/<id>/status`, тело `{ "status": ... }`
    Status,
    /// `PATCH <endpoint>/<id>/decision`, тело `{ "decision": ... }`
    Decision,
}

impl PatchStyle {
    pub fn segment(&self) -> &'static str {
        match self {
            PatchStyle::Action => "action",
            PatchStyle::Status => "status",
            PatchStyle::Decision => "decision",
        }
    }

    pub fn key(&self) -> &'static str {
        self.segment()
    }

    /// Путь PATCH-запроса для записи
    pub fn path(&self, endpoint: &str, id: &str) -> String {
        format!("{}/{}/{}", endpoint.trim_end_matches('/'), id, self.segment())
    }
}

/// Запрос на выполнение действия над записью
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionRequest {
    pub action: String,
    pub notes: Option<String>,
    /// Дополнительные поля тела, передаются серверу как есть
    pub extra: Map<String, Value>,
}

impl ActionRequest {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }

    /// Тело PATCH-запроса в формате вида
    pub fn to_body(&self, style: PatchStyle) -> Value {
        let mut body = self.extra.clone();
        body.insert(style.key().to_string(), Value::String(self.action.clone()));
        if let Some(notes) = &self.notes {
            body.insert("notes".to_string(), Value::String(notes.clone()));
        }
        Value::Object(body)
    }

    /// Разбор тела PATCH-запроса
    pub fn from_body(style: PatchStyle, body: &Value) -> Result<Self, String> {
        let object = body
            .as_object()
            .ok_or_else(|| "Request body must be a JSON object".to_string())?;

        let action = object
            .get(style.key())
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| format!("Field '{}' is required", style.key()))?
            .to_string();

        let notes = object
            .get("notes")
            .and_then(Value::as_str)
            .map(str::to_string);

        let extra = object
            .iter()
            .filter(|(k, _)| k.as_str() != style.key() && k.as_str() != "notes")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            action,
            notes: None,
            extra,
        }
        .with_notes(notes))
    }

    pub fn notes_str(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_body_uses_status_key() {
        let req = ActionRequest::new("schedule_exit_interview")
            .with_notes(Some("done".to_string()));
        let body = req.to_body(PatchStyle::Status);
        assert_eq!(
            body,
            json!({ "status": "schedule_exit_interview", "notes": "done" })
        );
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let req = ActionRequest::new("approve").with_notes(Some("   ".to_string()));
        assert_eq!(req.to_body(PatchStyle::Decision), json!({ "decision": "approve" }));
    }

    #[test]
    fn test_from_body_keeps_extra_fields() {
        let body = json!({ "action": "revoke_access", "priority": "high" });
        let req = ActionRequest::from_body(PatchStyle::Action, &body).unwrap();
        assert_eq!(req.action, "revoke_access");
        assert_eq!(req.notes, None);
        assert_eq!(req.extra.get("priority"), Some(&json!("high")));
    }

    #[test]
    fn test_from_body_requires_key_of_style() {
        let body = json!({ "action": "approve" });
        assert!(ActionRequest::from_body(PatchStyle::Decision, &body).is_err());
        assert!(ActionRequest::from_body(PatchStyle::Decision, &json!([])).is_err());
    }

    #[test]
    fn test_patch_path() {
        assert_eq!(
            PatchStyle::Status.path("/api/company/recruitment/interns/termination", "t-1"),
            "/api/company/recruitment/interns/termination/t-1/status"
        );
    }
}
