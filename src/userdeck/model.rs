//! User records as served by the collection endpoint. Field names follow the
//! upstream JSON (camelCase) so bodies deserialize without translation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque record identifier. Upstream serves integers, but any JSON number or
/// string is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(formatter, "{id}"),
            UserId::Text(id) => write!(formatter, "{id}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
}


#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const LEANNE_JSON: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn deserializes_upstream_shape() -> Result<()> {
        let user: UserRecord = serde_json::from_str(LEANNE_JSON)?;
        assert_eq!(user, fixtures::leanne());
        Ok(())
    }

    #[test]
    fn accepts_string_ids() -> Result<()> {
        let json = LEANNE_JSON.replacen("\"id\": 1", "\"id\": \"01HX\"", 1);
        let user: UserRecord = serde_json::from_str(&json)?;
        assert_eq!(user.id, UserId::Text("01HX".to_string()));
        assert_eq!(user.id.to_string(), "01HX");
        Ok(())
    }

    #[test]
    fn accepts_signed_and_fractional_ids() -> Result<()> {
        for (raw, shown) in [("-7", "-7"), ("2.5", "2.5")] {
            let json = LEANNE_JSON.replacen("\"id\": 1", &format!("\"id\": {raw}"), 1);
            let user: UserRecord = serde_json::from_str(&json)?;
            assert_eq!(user.id.to_string(), shown);
        }

        // One unusual id must not fail the whole collection.
        let negative = LEANNE_JSON.replacen("\"id\": 1", "\"id\": -1", 1);
        let users: Vec<UserRecord> = serde_json::from_str(&format!("[{LEANNE_JSON}, {negative}]"))?;
        assert_eq!(users.len(), 2);
        Ok(())
    }

    #[test]
    fn rejects_missing_company() {
        let json = r#"{"id": 2, "name": "Ervin Howell"}"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }
}
