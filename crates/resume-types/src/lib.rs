//! Shared data model for the resume generation pipeline
//!
//! These types describe the candidate attributes fed into the generator and
//! the structured resume the generator is expected to produce. The same
//! shape is serialized into the JSON snapshot and into the schema sent to
//! the LLM as a structured-output constraint.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Candidate attributes submitted to the pipeline for one resume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInput {
    pub name: String,
    pub phone_number: String,
    pub desired_job: String,
    pub years_of_experience: u32,
    pub location: String,
}

/// Contact block of a generated resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    pub location: String,
}

/// One position in the work history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

/// One entry in the education section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: Option<String>,
    pub institution: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub details: String,
}

/// Portfolio project reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Structured resume returned by the content generator
///
/// Optional sections stay `None` when the generator omits them; the
/// renderer skips empty sections instead of printing placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub contact_info: Contacts,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<Experience>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub certifications: Option<Vec<String>>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
    #[serde(default)]
    pub portfolio: Option<Vec<Project>>,
}

/// JSON schema for [`Resume`], sent to the LLM as the structured-output
/// response format.
pub fn resume_json_schema() -> Value {
    let nullable_string = json!({ "type": ["string", "null"] });
    let nullable_string_array = json!({
        "type": ["array", "null"],
        "items": { "type": "string" }
    });

    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["name", "contact_info", "title", "summary"],
        "properties": {
            "name": { "type": "string", "description": "Full candidate name" },
            "contact_info": {
                "type": "object",
                "additionalProperties": false,
                "required": ["phone", "email", "location"],
                "properties": {
                    "phone": { "type": "string" },
                    "email": { "type": "string" },
                    "linkedin": nullable_string,
                    "github": nullable_string,
                    "location": { "type": "string" }
                }
            },
            "title": { "type": "string", "description": "Desired job title" },
            "summary": { "type": "string", "description": "Short professional summary" },
            "skills": nullable_string_array,
            "experience": {
                "type": ["array", "null"],
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["job_title", "company", "start_date"],
                    "properties": {
                        "job_title": { "type": "string" },
                        "company": { "type": "string" },
                        "start_date": { "type": "string" },
                        "end_date": nullable_string,
                        "achievements": nullable_string_array
                    }
                }
            },
            "education": {
                "type": ["array", "null"],
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["institution", "start_date", "details"],
                    "properties": {
                        "degree": nullable_string,
                        "institution": { "type": "string" },
                        "start_date": { "type": "string" },
                        "end_date": nullable_string,
                        "details": { "type": "string" }
                    }
                }
            },
            "languages": nullable_string_array,
            "certifications": nullable_string_array,
            "hobbies": nullable_string_array,
            "portfolio": {
                "type": ["array", "null"],
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "name": nullable_string,
                        "link": nullable_string,
                        "description": nullable_string
                    }
                }
            }
        }
    })
}
