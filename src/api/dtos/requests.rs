use crate::domain::models::{message::NewMessage, property::NewProperty, task::NewTask};
use crate::error::AppError;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create-form payload. Everything is optional at the wire level so the
/// handler can report all missing fields at once instead of a serde 422.
#[derive(Deserialize)]
pub struct CreatePropertyRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub max_guests: Option<i64>,
    pub price_per_night: Option<f64>,
}

impl CreatePropertyRequest {
    pub fn into_new(self, owner_id: i64) -> Result<NewProperty, AppError> {
        let mut missing = Vec::new();
        if self.name.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("name");
        }
        if self.address.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("address");
        }
        if self.property_type.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("type");
        }
        match self.price_per_night {
            None => missing.push("price_per_night"),
            Some(p) if p < 0.0 => missing.push("price_per_night"),
            Some(_) => {}
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing or invalid fields: {}",
                missing.join(", ")
            )));
        }

        Ok(NewProperty {
            name: self.name.unwrap(),
            address: self.address.unwrap(),
            property_type: self.property_type.unwrap(),
            bedrooms: self.bedrooms.unwrap_or(1),
            bathrooms: self.bathrooms.unwrap_or(1),
            max_guests: self.max_guests.unwrap_or(2),
            // two-decimal fixed point at the boundary
            price_per_night: (self.price_per_night.unwrap() * 100.0).round() / 100.0,
            owner_id: Some(owner_id),
        })
    }
}

#[derive(Deserialize)]
pub struct CreateMessageRequest {
    pub booking_id: Option<i64>,
    pub message: Option<String>,
}

impl CreateMessageRequest {
    pub fn into_new(self, sender_name: String, sender_email: String) -> Result<NewMessage, AppError> {
        let body = self.message.unwrap_or_default();
        if body.trim().is_empty() {
            return Err(AppError::Validation(
                "Missing or invalid fields: message".into(),
            ));
        }
        Ok(NewMessage {
            booking_id: self.booking_id,
            sender_name,
            sender_email,
            body,
            channel: "internal".into(),
            status: "sent".into(),
        })
    }
}

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub property_id: Option<i64>,
    pub booking_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
    pub due_date: Option<NaiveDateTime>,
}

impl CreateTaskRequest {
    pub fn into_new(self, assigned_to: i64) -> Result<NewTask, AppError> {
        let mut missing = Vec::new();
        if self.title.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("title");
        }
        if self.task_type.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("type");
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing or invalid fields: {}",
                missing.join(", ")
            )));
        }
        Ok(NewTask {
            property_id: self.property_id,
            booking_id: self.booking_id,
            title: self.title.unwrap(),
            description: self.description,
            task_type: self.task_type.unwrap(),
            assigned_to: Some(assigned_to),
            due_date: self.due_date,
        })
    }
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    /// Any non-empty status string is accepted; the observed values are not
    /// an enforced enumeration.
    pub fn status(self) -> Result<String, AppError> {
        let status = self.status.unwrap_or_default();
        if status.trim().is_empty() {
            return Err(AppError::Validation(
                "Missing or invalid fields: status".into(),
            ));
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_request_reports_all_missing_fields() {
        let req = CreatePropertyRequest {
            name: None,
            address: Some("".into()),
            property_type: None,
            bedrooms: None,
            bathrooms: None,
            max_guests: None,
            price_per_night: None,
        };
        let err = req.into_new(1).unwrap_err();
        let msg = err.to_string();
        for field in ["name", "address", "type", "price_per_night"] {
            assert!(msg.contains(field), "expected {} in {}", field, msg);
        }
    }

    #[test]
    fn property_request_applies_defaults_and_rounds_price() {
        let req = CreatePropertyRequest {
            name: Some("Loft".into()),
            address: Some("1 Side St".into()),
            property_type: Some("studio".into()),
            bedrooms: None,
            bathrooms: None,
            max_guests: None,
            price_per_night: Some(99.999),
        };
        let new = req.into_new(2).unwrap();
        assert_eq!(new.bedrooms, 1);
        assert_eq!(new.max_guests, 2);
        assert_eq!(new.price_per_night, 100.0);
        assert_eq!(new.owner_id, Some(2));
    }

    #[test]
    fn message_request_requires_body() {
        let req = CreateMessageRequest {
            booking_id: Some(1),
            message: Some("   ".into()),
        };
        assert!(req
            .into_new("Staff".into(), "s@example.com".into())
            .is_err());
    }

    #[test]
    fn task_request_requires_title_and_type() {
        let req = CreateTaskRequest {
            property_id: None,
            booking_id: None,
            title: None,
            description: None,
            task_type: None,
            due_date: None,
        };
        let msg = req.into_new(1).unwrap_err().to_string();
        assert!(msg.contains("title"));
        assert!(msg.contains("type"));
    }
}
