//! Typed creation parameters for each Twilio resource.
//!
//! Each struct serializes with `PascalCase` field names, which is exactly the
//! form-parameter naming the Twilio REST API expects (`To`, `From`, `Url`,
//! `FriendlyName`, ...). The client posts them verbatim as the request body.

use serde::Serialize;

/// Form parameters for creating an outbound call (`POST .../Calls.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallParams {
    /// Destination phone number.
    pub to: String,
    /// Configured origin number.
    pub from: String,
    /// TwiML URL fetched when the call connects.
    pub url: String,
}

/// Form parameters for creating an SMS message (`POST .../Messages.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageParams {
    /// Destination phone number.
    pub to: String,
    /// Configured origin number.
    pub from: String,
    /// Message text.
    pub body: String,
}

/// Form parameters for creating an address (`POST .../Addresses.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressParams {
    /// Display name for the address.
    pub friendly_name: String,
    /// Name of the customer or business.
    pub customer_name: String,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// State or region.
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub iso_country: String,
}

/// Form parameters for creating a call queue (`POST .../Queues.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueParams {
    /// Display name for the queue.
    pub friendly_name: String,
    /// Configured origin number, forwarded opaquely.
    pub phone_number: String,
}

/// Form parameters for creating a subaccount (`POST /Accounts.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountParams {
    /// Display name for the subaccount.
    pub friendly_name: String,
}
