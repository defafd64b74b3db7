//! Player row normalization.
//!
//! Turns a [`RawPlayerRow`] into a [`NormalizedPlayerRecord`] without any I/O. Each JSON
//! payload column decodes independently, so a malformed money ledger never prevents the
//! character info or job from being extracted.

use chrono::{DateTime, Utc};
use sea_orm::JsonValue;

use crate::server::{
    model::player::{
        DecodeFailure, InvalidRow, Normalized, NormalizedPlayerRecord, Payload, PayloadColumn,
        RawPlayerRow,
    },
    util::parse::{parse_i64_from_json, parse_string_from_json},
};

/// Decodes a JSON payload column into an object, falling back instead of failing.
pub fn decode_payload(raw: Option<&str>) -> Payload {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Payload::Fallback(DecodeFailure::Missing);
    };

    match serde_json::from_str::<JsonValue>(raw) {
        Ok(JsonValue::Object(object)) => Payload::Decoded(object),
        Ok(_) => Payload::Fallback(DecodeFailure::NotAnObject),
        Err(e) => Payload::Fallback(DecodeFailure::Malformed(e.to_string())),
    }
}

/// Normalizes a player row into the canonical record shape.
///
/// Only a missing or blank license rejects the row. Every other field is best effort:
/// money and job values default to zero or empty when their payload is unusable.
///
/// # Arguments
/// - `row` - Typed row read from the game server
/// - `synced_at` - Timestamp recorded as the record's last sync time
///
/// # Returns
/// - `Ok(Normalized)` - The record plus any payload columns that fell back
/// - `Err(InvalidRow::MissingLicense)` - Row has no usable natural key
pub fn normalize(row: RawPlayerRow, synced_at: DateTime<Utc>) -> Result<Normalized, InvalidRow> {
    let license = row
        .license
        .as_deref()
        .map(str::trim)
        .filter(|license| !license.is_empty())
        .ok_or(InvalidRow::MissingLicense)?
        .to_string();

    let money = decode_payload(row.money.as_deref());
    let charinfo = decode_payload(row.charinfo.as_deref());
    let job = decode_payload(row.job.as_deref());

    let fallbacks = [
        (PayloadColumn::Money, &money),
        (PayloadColumn::Charinfo, &charinfo),
        (PayloadColumn::Job, &job),
    ]
    .into_iter()
    .filter_map(|(column, payload)| payload.failure().map(|f| (column, f.clone())))
    .collect();

    let (job_grade, job_grade_name) = grade_of(job.get("grade"));

    let record = NormalizedPlayerRecord {
        license,
        citizen_id: row
            .citizenid
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty()),
        name: row.name.unwrap_or_default(),
        first_name: text(&charinfo, "firstname"),
        last_name: text(&charinfo, "lastname"),
        cash: parse_i64_from_json(money.get("cash")).unwrap_or(0),
        bank: parse_i64_from_json(money.get("bank")).unwrap_or(0),
        job_name: text(&job, "name"),
        job_grade,
        job_grade_name,
        job_label: text(&job, "label"),
        job_payment: parse_i64_from_json(job.get("payment")).unwrap_or(0),
        money: money.into_value(),
        charinfo: charinfo.into_value(),
        job: job.into_value(),
        last_synced_at: synced_at,
    };

    Ok(Normalized { record, fallbacks })
}

fn text(payload: &Payload, key: &str) -> String {
    parse_string_from_json(payload.get(key)).unwrap_or_default()
}

/// Extracts the grade level and grade name from a job's `grade` field.
///
/// QBCore stores `{"level": 2, "name": "Sergeant"}`, other frameworks store a bare
/// number.
fn grade_of(grade: Option<&JsonValue>) -> (i32, String) {
    match grade {
        Some(JsonValue::Object(grade)) => (
            to_grade(parse_i64_from_json(grade.get("level"))),
            parse_string_from_json(grade.get("name")).unwrap_or_default(),
        ),
        other => (to_grade(parse_i64_from_json(other)), String::new()),
    }
}

fn to_grade(level: Option<i64>) -> i32 {
    level
        .and_then(|level| i32::try_from(level).ok())
        .unwrap_or(0)
}
