// crates/profile/src/domain/params/identity_patch.rs

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityPatch {
    pub username: Option<Option<String>>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub language_code: Option<Option<String>>,
    pub allows_write_to_pm: Option<bool>,
}
