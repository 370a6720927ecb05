//! Record shapes and the contract shared by the facade tests.

use uuid::Uuid;

use crate::Source;

#[derive(Clone, Debug, Source)]
#[morph(rename_all = "camelCase")]
pub struct FromRecordOne {
    pub id: Uuid,
    pub first_name: String,
    pub sur_name: String,
}

impl FromRecordOne {
    pub fn patrick() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: "Patrick".to_string(),
            sur_name: "Henderson".to_string(),
        }
    }
}

#[derive(Clone, Debug, Source)]
#[morph(rename_all = "camelCase")]
pub struct FromRecordTwo {
    pub first_name: String,
    pub sur_name: String,
}

impl FromRecordTwo {
    pub fn patrick() -> Self {
        Self {
            first_name: "Patrick".to_string(),
            sur_name: "Henderson".to_string(),
        }
    }
}

/// Only an id: satisfies no constructor that needs a name.
#[derive(Clone, Debug, Source)]
pub struct IdOnly {
    pub id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToRecordOne {
    pub first_name: String,
    pub sur_name: String,
}

#[morphic::constructors(rename_all = "camelCase")]
impl ToRecordOne {
    pub fn new(first_name: String, sur_name: String) -> Self {
        Self {
            first_name,
            sur_name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToRecordTwo {
    pub sur_name: String,
}

#[morphic::constructors(rename_all = "camelCase")]
impl ToRecordTwo {
    pub fn new(sur_name: String) -> Self {
        Self { sur_name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToRecordThree {
    pub id: Uuid,
    pub first_name: String,
    pub sur_name: String,
}

#[morphic::constructors(rename_all = "camelCase")]
impl ToRecordThree {
    #[primary]
    pub fn new(id: Uuid, first_name: String, sur_name: String) -> Self {
        Self {
            id,
            first_name,
            sur_name,
        }
    }

    /// Generates a fresh id.
    pub fn from_names(first_name: String, sur_name: String) -> Self {
        Self::new(Uuid::new_v4(), first_name, sur_name)
    }

    pub fn with_sur_name(id: Uuid, sur_name: String) -> Self {
        Self::new(id, "Eva".to_string(), sur_name)
    }
}

#[morphic::contract]
pub trait RecordMapper {
    fn multi_params(&self, source: FromRecordOne) -> morphic::Result<ToRecordOne>;

    fn single_param(&self, source: FromRecordOne) -> morphic::Result<ToRecordTwo>;

    fn multi_constructor(&self, source: FromRecordTwo) -> morphic::Result<ToRecordThree>;

    fn multi_default_constructor(&self, source: FromRecordOne) -> morphic::Result<ToRecordThree>;

    #[constructor(mappings = ["id", "surName"])]
    fn selected_constructor(&self, source: FromRecordOne) -> morphic::Result<ToRecordThree>;

    #[constructor(mappings = ["id", "surname"], case_sensitive = false)]
    fn selected_constructor_ignoring_case(
        &self,
        source: FromRecordOne,
    ) -> morphic::Result<ToRecordThree>;

    #[mapping(from = "surName", to = "firstName")]
    #[mapping(from = "firstname", to = "surname", case_sensitive = false)]
    fn swapped_names(&self, source: FromRecordOne) -> morphic::Result<ToRecordOne>;

    #[mapping(from = "surName", to = "firstName")]
    fn override_without_names(&self, source: FromRecordTwo) -> morphic::Result<ToRecordThree>;

    #[constructor(mappings = ["country"])]
    fn unknown_selector_name(&self, source: FromRecordOne) -> morphic::Result<ToRecordTwo>;

    #[mapping(from = "nickname", to = "firstName")]
    fn unknown_override_source(&self, source: FromRecordOne) -> morphic::Result<ToRecordOne>;

    fn nothing_matches(&self, source: IdOnly) -> morphic::Result<ToRecordTwo>;

    fn echo(&self, input: String) -> morphic::Result<String>;

    /// Not a mapping method: has a default body.
    fn describe(&self) -> &'static str {
        "records"
    }
}
