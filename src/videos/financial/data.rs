/// One company's figures as printed in a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Company {
    pub name: &'static str,
    pub revenue: &'static str,
    pub net_income: &'static str,
    pub ebitda: &'static str,
    pub assets: &'static str,
}

impl Company {
    /// Values in column order.
    pub fn cells(&self) -> [&'static str; COLUMNS] {
        [self.name, self.revenue, self.net_income, self.ebitda, self.assets]
    }
}

pub const ROWS: usize = 5;
pub const COLUMNS: usize = 5;

const fn company(
    name: &'static str,
    revenue: &'static str,
    net_income: &'static str,
    ebitda: &'static str,
    assets: &'static str,
) -> Company {
    Company { name, revenue, net_income, ebitda, assets }
}

/// Figures as loaded from the market-data spreadsheet.
pub const EXCEL_DATA: [Company; ROWS] = [
    company("Acme Corp", "$4,250M", "$890M", "$1,120M", "$8,450M"),
    company("Global Industries", "$7,830M", "$1,245M", "$2,340M", "$15,670M"),
    company("TechVision Inc", "$2,150M", "$412M", "$680M", "$5,230M"),
    company("Summit Financial", "$5,670M", "$1,890M", "$2,380M", "$22,100M"),
    company("Meridian Group", "$3,420M", "$567M", "$890M", "$9,780M"),
];

/// Figures as printed in the official reports.
pub const PDF_DATA: [Company; ROWS] = [
    company("Acme Corp", "$4,250M", "$890M", "$1,120M", "$8,450M"),
    company("Global Industries", "$7,830M", "$1,245M", "$2,340M", "$15,670M"),
    company("TechVision Inc", "$2,150M", "$425M", "$680M", "$5,230M"),
    company("Summit Financial", "$5,670M", "$1,890M", "$2,450M", "$22,100M"),
    company("Meridian Group", "$3,420M", "$567M", "$890M", "$9,870M"),
];

pub const COLUMN_LABELS: [&str; COLUMNS] = [
    "Unternehmen",
    "Umsatz",
    "Nettoergebnis",
    "EBITDA",
    "Verm\u{f6}gen",
];

/// A cell where the two sources disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub row: usize,
    pub column: usize,
    pub excel_value: &'static str,
    pub pdf_value: &'static str,
}

pub const MISMATCHES: [Mismatch; 3] = [
    Mismatch { row: 2, column: 2, excel_value: "$412M", pdf_value: "$425M" },
    Mismatch { row: 3, column: 3, excel_value: "$2,380M", pdf_value: "$2,450M" },
    Mismatch { row: 4, column: 4, excel_value: "$9,780M", pdf_value: "$9,870M" },
];

/// `(from, duration)` of each scene window.
pub const SCENE_TIMING: [(u64, u64); 6] = [
    (0, 300),
    (300, 450),
    (750, 450),
    (1200, 600),
    (1800, 600),
    (2400, 300),
];

pub const PREMOUNT: u64 = 30;
