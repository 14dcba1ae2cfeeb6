use crate::{foundation::core::Rgba8, videos::palette};

/// One row of the documented office inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub nr: u32,
    pub kind: &'static str,
    pub model: &'static str,
    pub ip: &'static str,
    pub location: &'static str,
    pub issue: Option<&'static str>,
}

pub const INVENTORY: [InventoryItem; 7] = [
    InventoryItem {
        nr: 1,
        kind: "Router",
        model: "Fritz!Box 7590",
        ip: "192.168.1.1",
        location: "Serverraum",
        issue: None,
    },
    InventoryItem {
        nr: 2,
        kind: "Switch",
        model: "Netgear GS108E",
        ip: "192.168.1.2",
        location: "Serverraum",
        issue: None,
    },
    InventoryItem {
        nr: 3,
        kind: "Access Point",
        model: "Ubiquiti UAP-AC-Lite",
        ip: "192.168.1.10",
        location: "Empfang",
        issue: Some("Kein WLAN-Passwort"),
    },
    InventoryItem {
        nr: 4,
        kind: "Workstation",
        model: "Dell OptiPlex 3080",
        ip: "192.168.1.101",
        location: "Arbeitsplatz 1",
        issue: Some("Keine Updates"),
    },
    InventoryItem {
        nr: 5,
        kind: "Workstation",
        model: "HP EliteDesk 800",
        ip: "192.168.1.102",
        location: "Arbeitsplatz 2",
        issue: Some("Manuell zugewiesen"),
    },
    InventoryItem {
        nr: 6,
        kind: "Drucker",
        model: "HP LaserJet Pro",
        ip: "192.168.1.50",
        location: "Druckerraum",
        issue: Some("Nicht pingbar"),
    },
    InventoryItem {
        nr: 7,
        kind: "Access Point",
        model: "Ubiquiti UAP-AC-Lite",
        ip: "\u{2014}",
        location: "Meetingraum",
        issue: Some("Nicht dokumentiert"),
    },
];

pub const INVENTORY_COLUMNS: [&str; 6] = [
    "Nr",
    "Typ",
    "Modell",
    "IP-Adresse",
    "Standort",
    "Problem",
];
pub const INVENTORY_COLUMN_WIDTHS: [f64; 6] = [50.0, 110.0, 200.0, 160.0, 140.0, 200.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Issue {
    pub icon: &'static str,
    pub text: &'static str,
    pub color: Rgba8,
}

pub const ISSUES: [Issue; 4] = [
    Issue { icon: "\u{26a0}", text: "WLAN-Passwort nicht dokumentiert", color: palette::WARNING },
    Issue { icon: "\u{2717}", text: "Sicherheitsupdates fehlen", color: palette::ERROR },
    Issue { icon: "\u{2717}", text: "Drucker nicht erreichbar (IP)", color: palette::ERROR },
    Issue { icon: "\u{26a0}", text: "Access Point undokumentiert", color: palette::WARNING },
];

pub const IMPROVEMENTS: [&str; 4] = [
    "WLAN-Passw\u{f6}rter dokumentieren",
    "Sicherheitsupdates einspielen",
    "IP-Adressplan erstellen",
    "Alle Ger\u{e4}te vollst\u{e4}ndig erfassen",
];

/// A node of the topology diagram, centered on `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Device {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub sub_label: &'static str,
    pub color: Rgba8,
    pub delay: i64,
    pub icon: &'static str,
}

const fn device(
    x: f64,
    y: f64,
    label: &'static str,
    sub_label: &'static str,
    color: Rgba8,
    delay: i64,
    icon: &'static str,
) -> Device {
    Device { x, y, label, sub_label, color, delay, icon }
}

const CX: f64 = 960.0;
const GLOBE: &str = "\u{1f310}";
const SWITCH: &str = "\u{1f500}";
const DESKTOP: &str = "\u{1f5a5}";
const PRINTER: &str = "\u{1f5a8}";
const ANTENNA: &str = "\u{1f4e1}";
const LAPTOP: &str = "\u{1f4bb}";

pub const DEVICES: [Device; 13] = [
    device(CX, 150.0, "Fritz!Box 7590", "192.168.1.1 \u{b7} Gateway", palette::ACCENT, 5, GLOBE),
    device(CX, 340.0, "Netgear GS108E", "192.168.1.2 \u{b7} Switch", palette::VIOLET, 12, SWITCH),
    device(340.0, 520.0, "Dell OptiPlex", "192.168.1.101", palette::BLUE, 20, DESKTOP),
    device(600.0, 520.0, "HP EliteDesk", "192.168.1.102", palette::BLUE, 24, DESKTOP),
    device(CX, 520.0, "HP LaserJet Pro", "192.168.1.50", palette::WARNING, 28, PRINTER),
    device(340.0, 700.0, "AP Empfang", "192.168.1.10", palette::SUCCESS, 32, ANTENNA),
    device(1580.0, 700.0, "AP Meetingraum", "IP fehlt!", palette::ERROR, 36, ANTENNA),
    device(200.0, 880.0, "Laptop Empfang 1", "DHCP", palette::CYAN, 42, LAPTOP),
    device(480.0, 880.0, "Laptop Empfang 2", "DHCP", palette::CYAN, 44, LAPTOP),
    device(1320.0, 520.0, "Laptop B\u{fc}ro 1", "DHCP", palette::CYAN, 46, LAPTOP),
    device(1580.0, 520.0, "Laptop B\u{fc}ro 2", "DHCP", palette::CYAN, 48, LAPTOP),
    device(1440.0, 880.0, "Laptop B\u{fc}ro 3", "DHCP", palette::CYAN, 50, LAPTOP),
    device(1720.0, 880.0, "Laptop B\u{fc}ro 4", "DHCP", palette::CYAN, 52, LAPTOP),
];

/// A cable (solid) or wireless (dashed) link drawn from `(x1, y1)` toward `(x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub delay: i64,
    pub dashed: bool,
}

const fn link(x1: f64, y1: f64, x2: f64, y2: f64, delay: i64, dashed: bool) -> Link {
    Link { x1, y1, x2, y2, delay, dashed }
}

pub const LINKS: [Link; 12] = [
    link(CX, 175.0, CX, 310.0, 10, false),
    link(CX, 365.0, 340.0, 500.0, 20, false),
    link(CX, 365.0, 600.0, 500.0, 22, false),
    link(CX, 365.0, CX, 500.0, 24, false),
    link(CX, 365.0, 1320.0, 500.0, 26, false),
    link(CX, 365.0, 1580.0, 500.0, 28, false),
    link(CX, 365.0, 340.0, 680.0, 30, true),
    link(CX, 365.0, 1580.0, 680.0, 32, true),
    link(340.0, 735.0, 200.0, 860.0, 38, true),
    link(340.0, 735.0, 480.0, 860.0, 40, true),
    link(1580.0, 735.0, 1440.0, 860.0, 42, true),
    link(1580.0, 735.0, 1720.0, 860.0, 44, true),
];

pub const TITLE_BADGES: [&str; 3] = [
    "8 Arbeitspl\u{e4}tze",
    "DSL 100 Mbit/s",
    "Gateway: 192.168.1.1",
];
