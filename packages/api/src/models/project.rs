use serde::{Deserialize, Serialize};

use super::{de_id, Owner};

/// A project row from `GET /projects/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "de_id")]
    pub project_id: String,
    pub project_title: String,
    pub project_description: String,
    #[serde(flatten)]
    pub owner: Owner,
}

/// `POST /projects/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub project_title: String,
    pub project_description: String,
    pub user_id: String,
}

/// `PUT /projects/{id}` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub updated_project_title: String,
    pub updated_project_description: String,
}
