//! Keyword classifier for free-text service records.
//!
//! Text is case-folded and tested for substring containment against an
//! ordered list of keyword rules. The first rule with any matching keyword
//! decides the category; nothing matching yields `Unclassified`.
//!
//! Containment is deliberately not word-bounded: a keyword embedded in a
//! longer word still matches (e.g. `طلب` inside `الطلبات`).

use servicedesk_core::Category;
use tracing::debug;

/// A category and the keywords that select it.
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Classification rules in priority order. Keywords are stored lowercase.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::Complaint,
        keywords: &[
            "شكوى", "تظلم", "اعتراض", "انزعاج",
            "complaint", "grievance", "objection", "annoyance",
        ],
    },
    Rule {
        category: Category::RequestForService,
        keywords: &[
            "أرجو", "أطلب", "يرجى", "طلب",
            "please", "request", "kindly", "demand",
        ],
    },
    Rule {
        category: Category::Incident,
        keywords: &[
            "بلاغ", "عطل", "مكسور", "خطر",
            "report", "fault", "broken", "danger",
        ],
    },
    Rule {
        category: Category::Compliment,
        keywords: &["شكر", "تقدير", "ثناء", "thanks", "appreciation", "praise"],
    },
    Rule {
        category: Category::Information,
        keywords: &[
            "استفسار", "معلومات", "أود أن أعرف",
            "inquiry", "information", "would like to know",
        ],
    },
    Rule {
        category: Category::Suggestion,
        keywords: &["اقترح", "اقتراح", "suggest", "suggestion"],
    },
];

/// Classify a text into a category. Never fails; empty text is `Unclassified`.
pub fn classify(text: &str) -> Category {
    match matched_rule(text) {
        Some((rule, keyword)) => {
            debug!(category = %rule.category, keyword, "keyword rule matched");
            rule.category.clone()
        }
        None => Category::Unclassified,
    }
}

/// The winning rule and the keyword that triggered it, if any.
pub fn matched_rule(text: &str) -> Option<(&'static Rule, &'static str)> {
    let folded = text.to_lowercase();
    RULES.iter().find_map(|rule| {
        rule.keywords
            .iter()
            .find(|kw| folded.contains(*kw))
            .map(|kw| (rule, *kw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_cover_six_categories_in_priority_order() {
        let order: Vec<&Category> = RULES.iter().map(|r| &r.category).collect();
        assert_eq!(
            order,
            vec![
                &Category::Complaint,
                &Category::RequestForService,
                &Category::Incident,
                &Category::Compliment,
                &Category::Information,
                &Category::Suggestion,
            ]
        );
    }

    #[test]
    fn keywords_are_stored_lowercase() {
        for rule in RULES {
            for kw in rule.keywords {
                assert_eq!(kw.to_lowercase(), *kw);
            }
        }
    }

    #[test]
    fn each_rule_matches_its_own_keywords() {
        for rule in RULES {
            for kw in rule.keywords {
                let text = format!("... {kw} ...");
                let got = classify(&text);
                // A keyword may also contain a higher-priority keyword; it must
                // never land lower than its own rule.
                let got_rank = RULES.iter().position(|r| r.category == got).unwrap();
                let own_rank = RULES
                    .iter()
                    .position(|r| r.category == rule.category)
                    .unwrap();
                assert!(got_rank <= own_rank, "{kw:?} classified as {got}");
            }
        }
    }

    #[test]
    fn no_keyword_is_unclassified() {
        assert_eq!(classify(""), Category::Unclassified);
        assert_eq!(classify("   "), Category::Unclassified);
        assert_eq!(classify("مرحبا"), Category::Unclassified);
        assert_eq!(classify("the meter reads 1234567"), Category::Unclassified);
    }

    #[test]
    fn complaint_beats_every_lower_rule() {
        assert_eq!(classify("شكوى واقتراح"), Category::Complaint);
        assert_eq!(classify("a complaint and a suggestion"), Category::Complaint);
        assert_eq!(classify("please log my complaint"), Category::Complaint);
        assert_eq!(classify("اعتراض على بلاغ سابق"), Category::Complaint);
    }

    #[test]
    fn request_beats_incident() {
        assert_eq!(classify("يرجى إصلاح العطل"), Category::RequestForService);
        assert_eq!(classify("kindly fix the broken pipe"), Category::RequestForService);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("URGENT FAULT report"), classify("urgent fault report"));
        assert_eq!(classify("URGENT FAULT report"), Category::Incident);
        assert_eq!(classify("Many THANKS"), Category::Compliment);
    }

    #[test]
    fn substring_match_inside_longer_word() {
        // "reported" contains "report"; "الطلبات" contains "طلب".
        assert_eq!(classify("it was reported"), Category::Incident);
        assert_eq!(classify("متابعة الطلبات"), Category::RequestForService);
        assert_eq!(classify("suggestions welcome"), Category::Suggestion);
    }

    #[test]
    fn arabic_examples() {
        assert_eq!(classify("يوجد عطل خطير"), Category::Incident);
        assert_eq!(classify("شكرا على سرعة الاستجابة"), Category::Compliment);
        assert_eq!(classify("أود أن أعرف موعد الزيارة"), Category::Information);
        assert_eq!(classify("اقترح إضافة خدمة جديدة"), Category::Suggestion);
    }

    #[test]
    fn matched_rule_reports_keyword() {
        let (rule, kw) = matched_rule("Broken street light").unwrap();
        assert_eq!(rule.category, Category::Incident);
        assert_eq!(kw, "broken");
        assert!(matched_rule("nothing here").is_none());
    }
}
