use crate::normalize::Fields;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Field-name variants seen upstream, in priority order
mod variants {
    pub const BUILD_ID: &[&str] = &["buildId", "BuildID", "buildid"];
    pub const IP: &[&str] = &["ip", "IP", "ipAddress"];
    pub const USER_NAME: &[&str] = &["userName", "UserName", "username"];
    pub const COMPUTER_NAME: &[&str] = &["computerName", "ComputerName", "computername"];
    pub const OPERATING_SYSTEM: &[&str] = &[
        "operationSystem",
        "OperationSystem",
        "operatingSystem",
        "OperatingSystem",
        "osVersion",
    ];
    pub const PROCESSOR: &[&str] = &["processor", "Processor", "cpuName"];
    pub const INSTALLED_RAM: &[&str] = &["installedRAM", "InstalledRAM", "ramSize"];
    pub const GRAPHICS_CARD: &[&str] = &["graphicsCard", "GraphicsCard"];
    pub const GPU_LIST: &str = "gpus";
    pub const COUNTRY: &[&str] = &["country", "Country"];
    pub const SYSTEM_LANGUAGE: &[&str] = &["systemLanguage", "SystemLanguage", "language"];
    pub const TIME_ZONE: &[&str] = &["timeZone", "TimeZone", "timezone"];
    pub const DISPLAY_RESOLUTION: &[&str] =
        &["displayResolution", "DisplayResolution", "screenResolution"];
    pub const FILE_TYPE: &[&str] = &["fileType", "FileType"];
    pub const FILE_TREE: &str = "fileTree";
}

/// Profile of a compromised machine, as returned by `/machineinfo`.
///
/// The upstream payload is inconsistent: it may be wrapped in a `data`
/// envelope and names the same attribute differently between records
/// (`buildId`, `BuildID`, `buildid`, ...). Deserialization resolves each
/// attribute from the first non-empty variant; missing or mistyped fields
/// are left empty rather than failing. Serialization uses the canonical
/// camelCase names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineInfo {
    /// Build identifier of the malware that collected the profile
    pub build_id: String,
    /// Public IP address of the machine
    pub ip: String,
    /// Logged-in user name
    pub user_name: String,
    /// Host name
    pub computer_name: String,
    /// Operating system and version
    #[serde(rename = "operationSystem")]
    pub operating_system: String,
    /// CPU model
    pub processor: String,
    /// Installed memory, as reported (e.g. "16 GB")
    #[serde(rename = "installedRAM")]
    pub installed_ram: String,
    /// Primary GPU
    pub graphics_card: String,
    /// Country
    pub country: String,
    /// System UI language
    pub system_language: String,
    /// Configured time zone
    pub time_zone: String,
    /// Primary display resolution
    pub display_resolution: String,
    /// Type of the collected log archive
    pub file_type: String,
    /// Paths contained in the collected log archive
    pub file_tree: Vec<String>,
}

impl MachineInfo {
    /// Normalize a raw machine info payload.
    ///
    /// Fails only if the payload (after unwrapping a `data` envelope) is not
    /// a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        let fields = Fields::unwrapped(value)
            .ok_or_else(|| serde_json::Error::custom("machine info payload is not a JSON object"))?;
        Ok(Self::from_fields(fields))
    }

    fn from_fields(fields: Fields<'_>) -> Self {
        let pick = |keys: &[&str]| fields.first_str(keys).to_owned();

        let mut graphics_card = pick(variants::GRAPHICS_CARD);
        if graphics_card.is_empty() {
            graphics_card = fields.first_of_list(variants::GPU_LIST).to_owned();
        }

        Self {
            build_id: pick(variants::BUILD_ID),
            ip: pick(variants::IP),
            user_name: pick(variants::USER_NAME),
            computer_name: pick(variants::COMPUTER_NAME),
            operating_system: pick(variants::OPERATING_SYSTEM),
            processor: pick(variants::PROCESSOR),
            installed_ram: pick(variants::INSTALLED_RAM),
            graphics_card,
            country: pick(variants::COUNTRY),
            system_language: pick(variants::SYSTEM_LANGUAGE),
            time_zone: pick(variants::TIME_ZONE),
            display_resolution: pick(variants::DISPLAY_RESOLUTION),
            file_type: pick(variants::FILE_TYPE),
            file_tree: fields.str_list(variants::FILE_TREE),
        }
    }

    /// Returns true if no attribute could be resolved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl<'de> Deserialize<'de> for MachineInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let fields = Fields::unwrapped(&value)
            .ok_or_else(|| D::Error::custom("machine info payload is not a JSON object"))?;
        Ok(Self::from_fields(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> MachineInfo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_envelope_matches_bare_payload() {
        let payload = json!({
            "BuildID": "LogsCloud",
            "ipAddress": "203.0.113.7",
            "username": "alice",
            "OperatingSystem": "Windows 10 Pro x64",
            "cpuName": "Intel Core i7-9700K",
            "fileTree": ["Passwords.txt", "Cookies/Chrome.txt"]
        });
        let wrapped = json!({ "data": payload.clone() });
        assert_eq!(decode(wrapped), decode(payload));
    }

    #[test]
    fn test_first_variant_wins() {
        let info = decode(json!({"buildId": "a", "BuildID": "b", "buildid": "c"}));
        assert_eq!(info.build_id, "a");

        let info = decode(json!({"BuildID": "b"}));
        assert_eq!(info.build_id, "b");
    }

    #[test]
    fn test_empty_variant_falls_through() {
        let info = decode(json!({"processor": "", "Processor": "", "cpuName": "Ryzen 7"}));
        assert_eq!(info.processor, "Ryzen 7");
    }

    #[test]
    fn test_operating_system_variants() {
        let info = decode(json!({"osVersion": "Windows 11", "operatingSystem": "Windows 10"}));
        assert_eq!(info.operating_system, "Windows 10");

        let info = decode(json!({"osVersion": "Windows 11"}));
        assert_eq!(info.operating_system, "Windows 11");
    }

    #[test]
    fn test_graphics_card_falls_back_to_gpu_list() {
        let info = decode(json!({"gpus": ["NVIDIA X", "AMD Y"]}));
        assert_eq!(info.graphics_card, "NVIDIA X");

        let info = decode(json!({"GraphicsCard": "Intel UHD", "gpus": ["NVIDIA X"]}));
        assert_eq!(info.graphics_card, "Intel UHD");

        let info = decode(json!({"gpus": []}));
        assert_eq!(info.graphics_card, "");
    }

    #[test]
    fn test_empty_object_yields_empty_entity() {
        let info = decode(json!({}));
        assert!(info.is_empty());
        assert!(info.file_tree.is_empty());
    }

    #[test]
    fn test_mistyped_fields_are_empty() {
        let info = decode(json!({
            "ip": 12345,
            "country": null,
            "timeZone": ["UTC"],
            "fileTree": "not-a-list",
            "language": "en-US"
        }));
        assert_eq!(info.ip, "");
        assert_eq!(info.country, "");
        assert_eq!(info.time_zone, "");
        assert!(info.file_tree.is_empty());
        assert_eq!(info.system_language, "en-US");
    }

    #[test]
    fn test_null_envelope_reads_outer_object() {
        let info = decode(json!({"data": null, "country": "DE"}));
        assert_eq!(info.country, "DE");
    }

    #[test]
    fn test_non_object_payload_fails() {
        assert!(serde_json::from_value::<MachineInfo>(json!(["a"])).is_err());
        assert!(serde_json::from_value::<MachineInfo>(json!({"data": 7})).is_err());
        assert!(MachineInfo::from_value(&json!("text")).is_err());
    }

    #[test]
    fn test_serialized_form_decodes_to_itself() {
        let info = MachineInfo {
            build_id: "b1".to_string(),
            operating_system: "Windows 10".to_string(),
            installed_ram: "16 GB".to_string(),
            graphics_card: "NVIDIA X".to_string(),
            file_tree: vec!["a.txt".to_string()],
            ..MachineInfo::default()
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["operationSystem"], "Windows 10");
        assert_eq!(value["installedRAM"], "16 GB");
        assert_eq!(decode(value), info);
    }
}
