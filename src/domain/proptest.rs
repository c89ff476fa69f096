use ::proptest::prelude::*;

use super::*;

fn arb_flags() -> impl Strategy<Value = ClinicalFlags> {
    prop::array::uniform7(any::<bool>()).prop_map(|b| ClinicalFlags {
        pregnant: b[0],
        breastfeeding: b[1],
        vomiting_or_diarrhea: b[2],
        followed_low_iodine_diet: b[3],
        renal_function_ok: b[4],
        on_interfering_medications: b[5],
        can_follow_safety_instructions: b[6],
    })
}

fn arb_risk() -> impl Strategy<Value = RiskCategory> {
    prop_oneof![
        Just(RiskCategory::Low),
        Just(RiskCategory::Intermediate),
        Just(RiskCategory::High),
        Just(RiskCategory::Unknown),
    ]
}

prop_compose! {
    fn arb_record()(
        age in 0u32..=150,
        female in any::<bool>(),
        tsh in 0.0f64..120.0,
        flags in arb_flags(),
        risk in arb_risk(),
    ) -> PatientRecord {
        let sex = if female { Sex::Female } else { Sex::Male };
        PatientRecord::new(age, sex, tsh, flags, risk).expect("generated record is valid")
    }
}

/// Fired rules computed directly from the record, in table order.
fn expected_issues(record: &PatientRecord) -> Vec<(RuleId, EligibilityStatus)> {
    let f = record.flags();
    let checks = [
        (f.pregnant, RuleId::Pregnancy, EligibilityStatus::Contraindicated),
        (f.breastfeeding, RuleId::Breastfeeding, EligibilityStatus::Contraindicated),
        (f.vomiting_or_diarrhea, RuleId::GastrointestinalIllness, EligibilityStatus::Contraindicated),
        (!f.can_follow_safety_instructions, RuleId::SafetyNonCompliance, EligibilityStatus::Contraindicated),
        (!f.renal_function_ok, RuleId::RenalImpairment, EligibilityStatus::NeedsReview),
        (f.on_interfering_medications, RuleId::InterferingMedication, EligibilityStatus::NeedsReview),
        (!f.followed_low_iodine_diet, RuleId::LowIodineDietNotFollowed, EligibilityStatus::NeedsReview),
        (record.tsh() < 30.0, RuleId::InsufficientTsh, EligibilityStatus::NeedsReview),
    ];
    checks
        .into_iter()
        .filter(|(fired, _, _)| *fired)
        .map(|(_, id, severity)| (id, severity))
        .collect()
}

/// Each flag set to its unsafe value.
fn unsafe_variants(flags: ClinicalFlags) -> [ClinicalFlags; 7] {
    [
        ClinicalFlags { pregnant: true, ..flags },
        ClinicalFlags { breastfeeding: true, ..flags },
        ClinicalFlags { vomiting_or_diarrhea: true, ..flags },
        ClinicalFlags { followed_low_iodine_diet: false, ..flags },
        ClinicalFlags { renal_function_ok: false, ..flags },
        ClinicalFlags { on_interfering_medications: true, ..flags },
        ClinicalFlags { can_follow_safety_instructions: false, ..flags },
    ]
}

proptest! {
    #[test]
    fn status_is_max_fired_severity(record in arb_record()) {
        let assessment = EligibilityEngine::new().evaluate(&record);
        let expected = expected_issues(&record)
            .iter()
            .map(|(_, s)| *s)
            .max()
            .unwrap_or(EligibilityStatus::Eligible);
        prop_assert_eq!(assessment.status, expected);
    }

    #[test]
    fn issues_follow_rule_order(record in arb_record()) {
        let assessment = EligibilityEngine::new().evaluate(&record);
        let actual: Vec<(RuleId, EligibilityStatus)> = assessment
            .issues
            .iter()
            .map(|i| (i.rule, i.severity))
            .collect();
        prop_assert_eq!(actual, expected_issues(&record));
    }

    #[test]
    fn evaluation_is_idempotent(record in arb_record()) {
        let engine = EligibilityEngine::new();
        prop_assert_eq!(engine.evaluate(&record), engine.evaluate(&record));
    }

    #[test]
    fn unsafe_flag_never_lowers_status(record in arb_record()) {
        let engine = EligibilityEngine::new();
        let baseline = engine.evaluate(&record).status;

        for flags in unsafe_variants(*record.flags()) {
            let flipped = PatientRecord::new(
                record.age(),
                record.sex(),
                record.tsh(),
                flags,
                record.risk_category(),
            )
            .expect("same values stay valid");
            prop_assert!(engine.evaluate(&flipped).status >= baseline);
        }
    }

    #[test]
    fn lower_tsh_never_lowers_status(record in arb_record(), drop in 0.0f64..50.0) {
        let engine = EligibilityEngine::new();
        let baseline = engine.evaluate(&record).status;
        let lowered = PatientRecord::new(
            record.age(),
            record.sex(),
            (record.tsh() - drop).max(0.0),
            *record.flags(),
            record.risk_category(),
        )
        .expect("non-negative TSH is valid");
        prop_assert!(engine.evaluate(&lowered).status >= baseline);
    }

    #[test]
    fn dose_lookup_is_total(label in ".*") {
        let advice = DoseAdvisor::new().suggest_for_label(&label);
        prop_assert_eq!(advice.category, RiskCategory::from_label(&label));
        prop_assert_eq!(advice.band.is_none(), advice.category == RiskCategory::Unknown);
    }
}
