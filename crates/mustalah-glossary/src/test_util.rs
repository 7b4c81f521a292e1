use std::path::Path;

use crate::index::TermIndex;
use crate::loader;

/// Small well-formed glossary shared by the engine tests.
pub(crate) const SAMPLE_CSV: &str = "\
Num;Old_Num;MOTS_AR;MOTS_fr;DESIGNATION;DESIGNATION_fr;chairdappartenance;Sous_Chapitre
1;O1;الاستخبارات;Intelligence;جمع وتحليل المعلومات;Collection and analysis of information;Operations;CI
2;O2;الإستراتيجية العسكرية;Stratégie militaire;تخطيط وإدارة الحملات;Planning and execution of campaigns;Strategy;General
3;O3;تكتيك;Tactique;فن استخدام القوات في المعركة;Art of using forces in battle;Operations;Maneuver
4;O4;دفاع;Défense;إجراءات الحماية;Protective measures;Strategy;Security
";

pub(crate) fn sample_index() -> TermIndex {
    loader::parse(SAMPLE_CSV, Path::new("sample.csv")).expect("sample glossary must parse")
}
