use regex::NoExpand;

use mustalah_core::{Correction, Language, ReplacementReport};

use crate::error::GlossaryError;
use crate::index::TermIndex;
use crate::matcher::boundary_pattern;

impl TermIndex {
    /// Apply an ordered find→replace map to `text`, then scan the result
    /// for glossary terms.
    ///
    /// Map entries are applied in order and each entry operates on the
    /// output of the previous one, not on the original text. Both the find
    /// side and the replaced occurrences obey the same whole-word boundary
    /// rule as [`TermIndex::scan`]; replacement text is inserted literally.
    /// A [`Correction`] is recorded only for entries that actually replaced
    /// something.
    ///
    /// The report is either/or (see [`ReplacementReport`]): corrections if
    /// any were made, otherwise the matches from the post-replacement scan.
    /// The scan always runs regardless. With an empty map this degenerates
    /// to a pure scan and the returned text is byte-identical to the input.
    pub fn check_and_replace(
        &self,
        text: &str,
        language: Language,
        map: &[(String, String)],
    ) -> Result<(String, ReplacementReport), GlossaryError> {
        let mut modified = text.to_string();
        let mut corrections = Vec::new();

        for (find, replace_with) in map {
            let pattern = boundary_pattern(find).map_err(|source| GlossaryError::Pattern {
                term: find.clone(),
                source,
            })?;
            let count = pattern.find_iter(&modified).count();
            if count == 0 {
                continue;
            }
            modified = pattern
                .replace_all(&modified, NoExpand(replace_with))
                .into_owned();
            tracing::debug!(found = %find, replaced_with = %replace_with, count, "applied correction");
            corrections.push(Correction {
                found: find.clone(),
                replaced_with: replace_with.clone(),
                count,
            });
        }

        let present = self.scan(&modified, language);
        let report = if corrections.is_empty() {
            ReplacementReport::Present(present)
        } else {
            ReplacementReport::Corrections(corrections)
        };
        Ok((modified, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_index;

    fn map(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(f, r)| (f.to_string(), r.to_string()))
            .collect()
    }

    #[test]
    fn test_replace_single_term() {
        let index = sample_index();
        let replacements = map(&[("مصطلح خاطئ", "الاستخبارات")]);
        let (text, report) = index
            .check_and_replace("هذا مصطلح خاطئ يجب استبداله", Language::Arabic, &replacements)
            .unwrap();
        assert_eq!(text, "هذا الاستخبارات يجب استبداله");
        let corrections = report.corrections();
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].found, "مصطلح خاطئ");
        assert_eq!(corrections[0].replaced_with, "الاستخبارات");
        assert_eq!(corrections[0].count, 1);
    }

    #[test]
    fn test_replace_french_counts_occurrences() {
        let index = sample_index();
        let replacements = map(&[("le faux terme", "Intelligence")]);
        let (text, report) = index
            .check_and_replace(
                "Ceci est le faux terme. Encore le faux terme.",
                Language::French,
                &replacements,
            )
            .unwrap();
        assert_eq!(text, "Ceci est Intelligence. Encore Intelligence.");
        assert_eq!(report.corrections().len(), 1);
        assert_eq!(report.corrections()[0].count, 2);
    }

    #[test]
    fn test_replace_is_sequential() {
        let index = sample_index();
        // the second entry operates on the output of the first
        let replacements = map(&[("alpha", "bravo"), ("bravo", "charlie")]);
        let (text, report) = index
            .check_and_replace("alpha", Language::French, &replacements)
            .unwrap();
        assert_eq!(text, "charlie");
        let corrections = report.corrections();
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].found, "alpha");
        assert_eq!(corrections[1].found, "bravo");
    }

    #[test]
    fn test_replace_respects_word_boundaries() {
        let index = sample_index();
        let replacements = map(&[("دفاع", "الدفاع الجوي")]);
        let (text, _) = index
            .check_and_replace("هذا عمل دفاعي وليس دفاع مباشر.", Language::Arabic, &replacements)
            .unwrap();
        // "دفاعي" is untouched, only the standalone word is replaced
        assert_eq!(text, "هذا عمل دفاعي وليس الدفاع الجوي مباشر.");
    }

    #[test]
    fn test_empty_map_degenerates_to_scan() {
        let index = sample_index();
        let input = "هذا الاستخبارات جيد.";
        let (text, report) = index
            .check_and_replace(input, Language::Arabic, &[])
            .unwrap();
        assert_eq!(text, input);
        let present = report.present();
        assert!(present.iter().any(|m| m.term == "الاستخبارات"));
    }

    #[test]
    fn test_unmatched_map_reports_present_terms() {
        let index = sample_index();
        let replacements = map(&[("le faux terme", "Intelligence")]);
        let input = "Un texte sans le terme à remplacer, mais avec Intelligence.";
        let (text, report) = index
            .check_and_replace(input, Language::French, &replacements)
            .unwrap();
        assert_eq!(text, input);
        // nothing replaced: the report carries what is already there
        assert!(matches!(report, ReplacementReport::Present(_)));
        assert!(report.present().iter().any(|m| m.term == "Intelligence"));
    }

    #[test]
    fn test_corrections_shadow_present_terms() {
        let index = sample_index();
        let replacements = map(&[("كلمة سيئة", "دفاع")]);
        let input = "هذه كلمة سيئة يجب استبدالها. وهذا تكتيك جيد.";
        let (text, report) = index
            .check_and_replace(input, Language::Arabic, &replacements)
            .unwrap();
        assert!(text.contains("دفاع"));
        assert!(text.contains("تكتيك"));
        // replacements happened, so only corrections are reported even
        // though glossary terms are present in the result
        assert!(matches!(report, ReplacementReport::Corrections(_)));
        assert_eq!(report.corrections().len(), 1);

        // a follow-up scan of the returned text sees both terms
        let rescan = index.scan(&text, Language::Arabic);
        assert!(rescan.iter().any(|m| m.term == "دفاع"));
        assert!(rescan.iter().any(|m| m.term == "تكتيك"));
    }

    #[test]
    fn test_replacement_text_is_literal() {
        let index = sample_index();
        // "$0" in the replacement must not expand to the matched text
        let replacements = map(&[("terme", "$0 corrigé")]);
        let (text, _) = index
            .check_and_replace("un terme simple", Language::French, &replacements)
            .unwrap();
        assert_eq!(text, "un $0 corrigé simple");
    }
}
