use serde_json::{json, Value};
use utoipa::ToSchema;

use super::structured::{to_structured_list, Fields, Structured};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Requirement {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Language {
    pub name: String,
    /// Free-form label such as Advanced, Intermediate or Beginner.
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Location {
    pub address: String,
    /// Free-form label such as On-site, Remote or Hybrid.
    pub location_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Company {
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub commitments: Vec<String>,
}

/// Aggregate root. Timestamps are kept as the ISO-8601 strings they arrived as.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct JobPost {
    pub id: String,
    pub title: String,
    pub created: String,
    pub deadline: String,
    pub description: String,
    pub requirements: Vec<Requirement>,
    pub languages: Vec<Language>,
    pub location: Location,
    pub company: Company,
}

impl Structured for Requirement {
    fn to_structured(&self) -> Value {
        json!({ "name": self.name })
    }

    fn from_structured(value: &Value) -> Result<Self> {
        let fields = Fields::of(value, "requirements")?;
        Ok(Self {
            name: fields.string("name")?,
        })
    }
}

impl Structured for Language {
    fn to_structured(&self) -> Value {
        json!({
            "name": self.name,
            "level": self.level,
        })
    }

    fn from_structured(value: &Value) -> Result<Self> {
        let fields = Fields::of(value, "languages")?;
        Ok(Self {
            name: fields.string("name")?,
            level: fields.string("level")?,
        })
    }
}

impl Structured for Location {
    fn to_structured(&self) -> Value {
        json!({
            "address": self.address,
            "location_type": self.location_type,
        })
    }

    fn from_structured(value: &Value) -> Result<Self> {
        let fields = Fields::of(value, "location")?;
        Ok(Self {
            address: fields.string("address")?,
            location_type: fields.string("location_type")?,
        })
    }
}

impl Structured for Company {
    fn to_structured(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "benefits": self.benefits,
            "commitments": self.commitments,
        })
    }

    fn from_structured(value: &Value) -> Result<Self> {
        let fields = Fields::of(value, "company")?;
        Ok(Self {
            name: fields.string("name")?,
            description: fields.string("description")?,
            benefits: fields.strings("benefits")?,
            commitments: fields.strings("commitments")?,
        })
    }
}

impl Structured for JobPost {
    fn to_structured(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "created": self.created,
            "deadline": self.deadline,
            "description": self.description,
            "requirements": to_structured_list(&self.requirements),
            "languages": to_structured_list(&self.languages),
            "location": self.location.to_structured(),
            "company": self.company.to_structured(),
        })
    }

    fn from_structured(value: &Value) -> Result<Self> {
        let fields = Fields::of(value, "job_post")?;
        Ok(Self {
            id: fields.string("id")?,
            title: fields.string("title")?,
            created: fields.string("created")?,
            deadline: fields.string("deadline")?,
            description: fields.string("description")?,
            requirements: fields.list("requirements")?,
            languages: fields.list("languages")?,
            location: fields.object("location")?,
            company: fields.object("company")?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;

    pub(crate) fn sample_job_post(id: &str) -> JobPost {
        JobPost {
            id: id.to_string(),
            title: "Senior Rust Developer".to_string(),
            created: "2024-05-01T09:30:00.000000".to_string(),
            deadline: "2024-12-31T23:59:59".to_string(),
            description: "Build backend services.".to_string(),
            requirements: vec![
                Requirement {
                    name: "5+ years of systems programming".to_string(),
                },
                Requirement {
                    name: "Experience with async Rust".to_string(),
                },
                Requirement {
                    name: "Experience with async Rust".to_string(),
                },
            ],
            languages: vec![
                Language {
                    name: "Rust".to_string(),
                    level: "Advanced".to_string(),
                },
                Language {
                    name: "SQL".to_string(),
                    level: "Intermediate".to_string(),
                },
            ],
            location: Location {
                address: "123 Tech Street".to_string(),
                location_type: "Hybrid".to_string(),
            },
            company: Company {
                name: "TechCorp".to_string(),
                description: "Web applications.".to_string(),
                benefits: vec!["Health insurance".to_string(), "Remote work".to_string()],
                commitments: vec!["Full-time".to_string()],
            },
        }
    }

    #[test]
    fn structured_round_trip_preserves_nested_order() {
        let post = sample_job_post("job-1");
        let value = post.to_structured();

        assert_eq!(value["requirements"][1]["name"], "Experience with async Rust");
        assert_eq!(value["languages"][0]["level"], "Advanced");
        assert_eq!(value["company"]["benefits"][1], "Remote work");

        let back = JobPost::from_structured(&value).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn structured_keys_follow_model_order() {
        let value = sample_job_post("job-1").to_structured();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            [
                "id",
                "title",
                "created",
                "deadline",
                "description",
                "requirements",
                "languages",
                "location",
                "company"
            ]
        );
    }

    #[test]
    fn missing_top_level_key_is_reported_by_name() {
        let mut value = sample_job_post("job-1").to_structured();
        value.as_object_mut().unwrap().remove("created");

        let err = JobPost::from_structured(&value).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref key) if key == "created"));
    }

    #[test]
    fn missing_nested_key_is_reported_by_name() {
        let mut value = sample_job_post("job-1").to_structured();
        value["languages"][1].as_object_mut().unwrap().remove("level");
        let err = JobPost::from_structured(&value).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref key) if key == "level"));

        let mut value = sample_job_post("job-1").to_structured();
        value["company"].as_object_mut().unwrap().remove("commitments");
        let err = JobPost::from_structured(&value).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref key) if key == "commitments"));
    }

    #[test]
    fn wrong_types_are_not_coerced() {
        let mut value = sample_job_post("job-1").to_structured();
        value["title"] = json!(42);
        let err = JobPost::from_structured(&value).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidType { ref field, expected: "string" } if field == "title"
        ));

        let mut value = sample_job_post("job-1").to_structured();
        value["requirements"] = json!({ "name": "not a list" });
        let err = JobPost::from_structured(&value).unwrap_err();
        assert!(matches!(err, Error::InvalidType { expected: "array", .. }));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let mut value = sample_job_post("job-1").to_structured();
        value["salary"] = json!("competitive");
        let post = JobPost::from_structured(&value).unwrap();
        assert!(post.to_structured().get("salary").is_none());
    }
}
