//! Localized display strings for the dashboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
    De,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Button text for the language switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Vi => "VI",
            Language::En => "EN",
            Language::De => "DE",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Vi, Language::En, Language::De]
    }

    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == normalized)
            .ok_or_else(|| DashboardError::UnsupportedLanguage(code.to_string()))
    }

    pub fn bundle(&self) -> &'static Bundle {
        match self {
            Language::Vi => &VI,
            Language::En => &EN,
            Language::De => &DE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

/// Every string the page shows in the selected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bundle {
    pub badge: &'static str,
    pub subtitle: &'static str,
    pub title: &'static str,
    pub macro_title: &'static str,
    pub macro_desc: &'static str,
    pub micro_title: &'static str,
    pub micro_desc: &'static str,
    pub it_impact: &'static str,
    pub non_it_impact: &'static str,
    pub value_prop: &'static str,
}

impl Bundle {
    pub fn fields(&self) -> [(&'static str, &'static str); 10] {
        [
            ("badge", self.badge),
            ("subtitle", self.subtitle),
            ("title", self.title),
            ("macro_title", self.macro_title),
            ("macro_desc", self.macro_desc),
            ("micro_title", self.micro_title),
            ("micro_desc", self.micro_desc),
            ("it_impact", self.it_impact),
            ("non_it_impact", self.non_it_impact),
            ("value_prop", self.value_prop),
        ]
    }

    pub fn validate(&self, language: Language) -> Result<()> {
        match self.fields().into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(DashboardError::IncompleteBundle {
                language: language.code(),
                field,
            }),
            None => Ok(()),
        }
    }
}

/// Checks every supported language resolves to a complete bundle.
pub fn validate_bundles() -> Result<()> {
    Language::all()
        .iter()
        .try_for_each(|lang| lang.bundle().validate(*lang))
}

static VI: Bundle = Bundle {
    badge: "Hệ thống biên dịch & Tối ưu hiệu năng",
    subtitle: "Khám phá kiến trúc và tác động kinh tế của Rust trong kỷ nguyên đa nhân.",
    title: "Phân Tích Tác Động Kinh Tế & Công Nghiệp",
    macro_title: "Yếu tố Vĩ mô (Vietnam)",
    macro_desc: "Chính sách Chuyển đổi số quốc gia tạo điều kiện cho việc ứng dụng công nghệ hiệu năng cao.",
    micro_title: "Yếu tố Vi mô",
    micro_desc: "Tối ưu hóa chi phí vận hành và tăng năng suất lập trình viên tại từng doanh nghiệp.",
    it_impact: "Ngành IT: Rút ngắn chu kỳ CI/CD, giảm lỗi bộ nhớ nhờ Rust.",
    non_it_impact: "Ngoài IT: Tư duy tối ưu hóa hệ thống áp dụng cho Logistic và Sản xuất.",
    value_prop: "Giá trị: Tiết kiệm 40% chi phí hạ tầng cloud thông qua hiệu suất biên dịch.",
};

static EN: Bundle = Bundle {
    badge: "Compilation System & Performance",
    subtitle: "Explore the architecture and economic impact of Rust in the multi-core era.",
    title: "Economic & Industrial Impact Analysis",
    macro_title: "Macro Factors (Vietnam)",
    macro_desc: "National Digital Transformation policy fosters high-performance tech adoption.",
    micro_title: "Micro Factors",
    micro_desc: "Optimizing operational costs and increasing developer productivity at firm level.",
    it_impact: "IT Industry: Shortening CI/CD cycles, reducing memory bugs via Rust.",
    non_it_impact: "Beyond IT: System optimization logic applied to Logistics and Manufacturing.",
    value_prop: "Value: 40% cloud infrastructure cost savings through compilation efficiency.",
};

static DE: Bundle = Bundle {
    badge: "Kompilierungssystem & Leistung",
    subtitle: "Erkunden Sie die Architektur und die wirtschaftlichen Auswirkungen von Rust im Multi-Core-Zeitalter.",
    title: "Wirtschafts- & Industrieauswirkungsanalyse",
    macro_title: "Makrofaktoren (Vietnam)",
    macro_desc: "Die nationale digitale Transformationspolitik fördert die Einführung von Hochleistungstechnologien.",
    micro_title: "Mikrofaktoren",
    micro_desc: "Optimierung der Betriebskosten und Steigerung der Entwicklerproduktivität auf Unternehmensebene.",
    it_impact: "IT-Branche: Verkürzung der CI/CD-Zyklen, Reduzierung von Speicherfehlern durch Rust.",
    non_it_impact: "Außerhalb der IT: Systemoptimierungslogik für Logistik und Fertigung.",
    value_prop: "Wert: 40% Einsparung bei Cloud-Infrastrukturkosten durch Kompilierungseffizienz.",
};
