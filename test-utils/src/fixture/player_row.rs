//! Game server player row fixtures.
//!
//! Rows are plain data in the shape the game server stores them, with JSON payloads kept
//! as text. Use them directly in normalizer tests or insert them through
//! [`SourceFixture::insert_player`](crate::source::SourceFixture::insert_player).

/// A `players` row as written by a QBCore server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRowFixture {
    pub license: Option<String>,
    pub citizenid: Option<String>,
    pub name: Option<String>,
    pub money: Option<String>,
    pub charinfo: Option<String>,
    pub job: Option<String>,
}

impl PlayerRowFixture {
    /// Replaces the money payload with arbitrary text.
    pub fn money(mut self, money: impl Into<String>) -> Self {
        self.money = Some(money.into());
        self
    }

    /// Replaces the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the job payload with arbitrary text.
    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.job = Some(job.into());
        self
    }
}

/// Creates a complete QBCore player row for the given license.
///
/// Defaults:
/// - citizenid: `"ABC12345"`
/// - name: `"Tester"`
/// - money: 500 cash, 5000 bank, 0 crypto
/// - charinfo: John Doe
/// - job: police, "Law Enforcement", grade 2 "Sergeant", payment 150
pub fn qbcore(license: &str) -> PlayerRowFixture {
    PlayerRowFixture {
        license: Some(license.to_string()),
        citizenid: Some("ABC12345".to_string()),
        name: Some("Tester".to_string()),
        money: Some(r#"{"cash":500,"bank":5000,"crypto":0}"#.to_string()),
        charinfo: Some(
            r#"{"firstname":"John","lastname":"Doe","birthdate":"1990-01-01","phone":"5551234"}"#
                .to_string(),
        ),
        job: Some(
            r#"{"name":"police","label":"Law Enforcement","payment":150,"onduty":true,"grade":{"name":"Sergeant","level":2}}"#
                .to_string(),
        ),
    }
}

/// Creates `count` QBCore rows with licenses `license:0` .. `license:{count-1}`.
pub fn qbcore_many(count: usize) -> Vec<PlayerRowFixture> {
    (0..count)
        .map(|i| qbcore(&format!("license:{}", i)).name(format!("Player {}", i)))
        .collect()
}
