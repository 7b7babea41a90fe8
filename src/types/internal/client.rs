/// Raw client fields as submitted by a trainer.
///
/// Used for both create and partial update: `None` means the field was not
/// supplied. `date_of_birth` is still unparsed text here.
#[derive(Debug, Clone, Default)]
pub struct ClientFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub profile_picture_url: Option<String>,
    pub health_notes: Option<String>,
}

/// A validated client ready to be persisted for a trainer
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub address: Option<String>,
    pub profile_picture_url: Option<String>,
    pub health_notes: Option<String>,
}
