//! Fixed catalogs the intake form offers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Area;

pub const OFFICES_IN_HOUSE: &[&str] = &[
    "CASSO",
    "CTO",
    "CHOUSING",
    "COMELEC",
    "CEO",
    "CCRO",
    "CSWD",
    "PDAO",
    "CIPO/TCBIC",
    "NEGOSYO CENTER",
    "GSO-UTILITY",
    "BPLO",
    "CBO",
    "CLO",
    "CACCO",
    "CMO-SECRETARY",
    "CMO-BACKSTOPPING/FISCAL MGT.",
    "CMO-SPECIAL PERMITS",
    "CMO-ADMIN",
    "CMO-SPECIAL PROGRAMS/PROJECT CO",
    "CMO-IAS",
    "CMO-LIBRARY",
    "CMO-SPM",
    "CMO-EDUKASYON",
    "CMO-GAD",
    "CMO-MUSLIM AFFAIRS",
    "PEESO",
    "CHRMO",
    "BAC",
    "CPDO",
    "CPDO-MRP",
    "SP SECRETARIAT",
    "CICTMO",
    "CVMO",
    "COUNCILOR REVITA",
    "COUNCILOR CAASI",
    "COUNCILOR ELLIOT",
    "COUNCILOR AALA",
    "COUNCILOR COQUILLA",
    "COUNCILOR PEREZ/IPMR",
    "COUNCILOR UY-SALAZAR",
    "COUNCILOR CATAYAS",
    "COUNCILOR LEMOS",
    "COUNCILOR WAKAN",
    "COUNCILOR ONG",
    "SKCF DILG",
    "ABC",
    "CIO",
    "COA",
    "PCSO",
    "TCYDO",
];

pub const OFFICES_ON_SITE: &[&str] = &[
    "CEO – Motorpool",
    "CEO – Fabrication",
    "CEO – Maintenance",
    "CEO – Electrical",
    "CMO – Sports",
    "Tourism",
    "CLibrary",
    "CVET",
    "CVET-Slaughter",
    "CSU",
    "TMU",
    "CAGRO",
    "CENRO",
    "CADAC",
    "CHO-CANOCOTAN",
    "CHO-MABINI",
    "CDRRMO",
    "CEEO",
    "CARCHO",
    "CMO-INSPECTORATE",
    "GSO-PSD",
    "GSO-ADMIN",
    "CEO-CONSTRUCTION",
    "CMO-MUSIC",
];

pub const OFFICES_INTERAGENCY: &[&str] = &["DEP-ED", "PAO", "PNP", "BJMP", "BARANGAY OFFICES"];

pub const BARANGAY_OFFICES: &[&str] = &[
    "Apokon",
    "Visayan",
    "La Filipina",
    "Mankilam",
    "Magugpo South",
    "Magugpo Poblacion",
    "Magugpo East",
    "Magugpo West",
    "San Isidro",
    "Nueva Fuerza",
    "Madaum",
    "Busaon",
    "Pandapan",
    "Liboganon",
    "New Balamban",
    "Cuambogan",
    "Canocotan",
    "Pagsabangan",
];

pub const TECHNICIANS: &[&str] = &[
    "Joyce Israel",
    "Nick Palaca",
    "Adrian Monton",
    "Vence Jabilles",
    "Balong Callena",
];

pub const PRINTER_BRANDS: &[&str] = &["Epson", "Canon", "HP", "Kyocera", "Brother"];

/// Interagency offices followed by every barangay office.
static INTERAGENCY_CATALOG: Lazy<Vec<&'static str>> = Lazy::new(|| {
    OFFICES_INTERAGENCY.iter().chain(BARANGAY_OFFICES.iter()).copied().collect()
});

/// Offices that may be selected while `area` is chosen.
pub fn office_catalog(area: Area) -> &'static [&'static str] {
    match area {
        Area::InHouse => OFFICES_IN_HOUSE,
        Area::OnSite => OFFICES_ON_SITE,
        Area::Interagency => INTERAGENCY_CATALOG.as_slice(),
    }
}

/// Request type of a technical report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    ComputerIsolation,
    SoftwareIsolation,
    NetworkIsolation,
    HardwareInstallation,
    Activation,
    PasswordRecovery,
    PrinterIsolation,
}

/// Bucket a request type is counted under in the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestCategory {
    Hardware,
    Software,
}

impl RequestType {
    pub const ALL: [RequestType; 7] = [
        RequestType::ComputerIsolation,
        RequestType::SoftwareIsolation,
        RequestType::NetworkIsolation,
        RequestType::HardwareInstallation,
        RequestType::Activation,
        RequestType::PasswordRecovery,
        RequestType::PrinterIsolation,
    ];

    /// The label stored on records and shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::ComputerIsolation => "Computer isolation",
            Self::SoftwareIsolation => "Software isolation installation and checking",
            Self::NetworkIsolation => "Network isolation installation and checking",
            Self::HardwareInstallation => "Hardware installation and checking",
            Self::Activation => "Activation of operating system and MS office",
            Self::PasswordRecovery => "Password recovery",
            Self::PrinterIsolation => {
                "Printer isolation (reset,installation, printer sharing, and checking)"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|el| el.label() == label)
    }

    pub fn category(self) -> RequestCategory {
        match self {
            Self::ComputerIsolation
            | Self::NetworkIsolation
            | Self::HardwareInstallation
            | Self::PrinterIsolation => RequestCategory::Hardware,
            Self::SoftwareIsolation | Self::Activation | Self::PasswordRecovery => {
                RequestCategory::Software
            }
        }
    }

    /// Printer work counts toward both the hardware and the software totals.
    pub fn counts_as(self, category: RequestCategory) -> bool {
        self == Self::PrinterIsolation || self.category() == category
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
