use serde::{Serialize, Serializer};

use crate::classifier::ClassifierError;

/// Number of features the classifier consumes per record.
pub const FEATURE_COUNT: usize = 9;

/// Field names in the exact order the model was trained on.
///
/// [`FeatureRecord::to_row`] emits values in this order; reordering or
/// omitting a field would silently corrupt predictions.
pub const FIELD_NAMES: [&str; FEATURE_COUNT] = [
    "cp", "thalach", "slope", "oldpeak", "exang", "ca", "thal", "sex", "age",
];

/// Patient sex as collected by the binary selector.
///
/// The selector labels are the Indonesian ones the form has always used:
/// "Perempuan" (female) and "Pria" (male). The modeled value is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Parses a selector label into a `Sex`.
    pub fn from_label(label: &str) -> Result<Self, ClassifierError> {
        match label {
            "Perempuan" => Ok(Sex::Female),
            "Pria" => Ok(Sex::Male),
            other => Err(ClassifierError::ValidationError(format!(
                "Unknown sex label '{}' (expected 'Perempuan' or 'Pria')",
                other
            ))),
        }
    }

    /// The value fed to the model: female maps to 0, male to 1.
    pub fn as_feature(&self) -> i64 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Perempuan",
            Sex::Male => "Pria",
        }
    }
}

impl Serialize for Sex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_feature())
    }
}

/// Display-only description of the chest pain category.
///
/// This text is shown next to the `cp` slider and is never fed to the model;
/// the classifier only ever sees the raw category number. Values outside
/// {1, 2, 3} all take the explicit default description.
pub fn chest_pain_description(cp: i64) -> &'static str {
    match cp {
        1 => "Nyeri dada tipe angina",
        2 => "Nyeri dada tipe nyeri tidak stabil",
        3 => "Nyeri dada tipe nyeri tidak stabil yang parah",
        _ => "Nyeri dada yang tidak terkait dengan masalah jantung",
    }
}

/// The single-row input the classifier consumes.
///
/// Fields are declared in model schema order (see [`FIELD_NAMES`]); serde
/// serialization and [`to_row`](Self::to_row) both follow that order.
/// Construct through [`FeatureRecord::builder`], which enforces the declared
/// range of every field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    /// Chest pain type, 1..=4.
    pub cp: i64,
    /// Maximum heart rate achieved, 71..=202.
    pub thalach: i64,
    /// ST segment slope category, 0..=2.
    pub slope: i64,
    /// ST depression magnitude, 0.0..=6.2.
    pub oldpeak: f32,
    /// Exercise induced angina flag, 0 or 1.
    pub exang: i64,
    /// Number of major vessels, 0..=3.
    pub ca: i64,
    /// Thalium stress test result category, 1..=3.
    pub thal: i64,
    /// Patient sex, modeled as 0 (female) or 1 (male).
    pub sex: Sex,
    /// Age in years, 29..=77.
    pub age: i64,
}

impl FeatureRecord {
    /// Creates a new builder seeded with the form's default values.
    pub fn builder() -> FeatureRecordBuilder {
        FeatureRecordBuilder::new()
    }

    /// Emits the record as the 1x9 row the model expects, in schema order.
    pub fn to_row(&self) -> [f32; FEATURE_COUNT] {
        [
            self.cp as f32,
            self.thalach as f32,
            self.slope as f32,
            self.oldpeak,
            self.exang as f32,
            self.ca as f32,
            self.thal as f32,
            self.sex.as_feature() as f32,
            self.age as f32,
        ]
    }
}

fn check_range<T: PartialOrd + std::fmt::Display + Copy>(
    name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<T, ClassifierError> {
    use std::cmp::Ordering;

    // partial_cmp is None for NaN, which must not slip through as "in range"
    let above_min = matches!(value.partial_cmp(&min), Some(Ordering::Greater | Ordering::Equal));
    let below_max = matches!(value.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal));
    if !above_min || !below_max {
        return Err(ClassifierError::ValidationError(format!(
            "Field '{}' out of range: {} (expected {}..={})",
            name, value, min, max
        )));
    }
    Ok(value)
}

/// A builder for constructing a validated [`FeatureRecord`].
///
/// Every setter mirrors one of the form controls; defaults match the
/// controls' initial positions, so `FeatureRecord::builder().build()` yields
/// the record the untouched form would submit.
#[derive(Debug, Clone)]
pub struct FeatureRecordBuilder {
    cp: i64,
    thalach: i64,
    slope: i64,
    oldpeak: f32,
    exang: i64,
    ca: i64,
    thal: i64,
    sex: Sex,
    age: i64,
}

impl Default for FeatureRecordBuilder {
    fn default() -> Self {
        Self {
            cp: 2,
            thalach: 80,
            slope: 1,
            oldpeak: 1.0,
            exang: 1,
            ca: 1,
            thal: 1,
            sex: Sex::Female,
            age: 30,
        }
    }
}

impl FeatureRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cp(mut self, cp: i64) -> Self {
        self.cp = cp;
        self
    }

    pub fn thalach(mut self, thalach: i64) -> Self {
        self.thalach = thalach;
        self
    }

    pub fn slope(mut self, slope: i64) -> Self {
        self.slope = slope;
        self
    }

    pub fn oldpeak(mut self, oldpeak: f32) -> Self {
        self.oldpeak = oldpeak;
        self
    }

    pub fn exang(mut self, exang: i64) -> Self {
        self.exang = exang;
        self
    }

    pub fn ca(mut self, ca: i64) -> Self {
        self.ca = ca;
        self
    }

    pub fn thal(mut self, thal: i64) -> Self {
        self.thal = thal;
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    /// Validates every field against its declared range and produces the
    /// record.
    ///
    /// # Errors
    /// `ValidationError` naming the first out-of-range field.
    pub fn build(self) -> Result<FeatureRecord, ClassifierError> {
        Ok(FeatureRecord {
            cp: check_range("cp", self.cp, 1, 4)?,
            thalach: check_range("thalach", self.thalach, 71, 202)?,
            slope: check_range("slope", self.slope, 0, 2)?,
            oldpeak: check_range("oldpeak", self.oldpeak, 0.0, 6.2)?,
            exang: check_range("exang", self.exang, 0, 1)?,
            ca: check_range("ca", self.ca, 0, 3)?,
            thal: check_range("thal", self.thal, 1, 3)?,
            sex: self.sex,
            age: check_range("age", self.age, 29, 77)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_label_mapping() {
        assert_eq!(Sex::from_label("Perempuan").unwrap(), Sex::Female);
        assert_eq!(Sex::from_label("Pria").unwrap(), Sex::Male);
        assert_eq!(Sex::Female.as_feature(), 0);
        assert_eq!(Sex::Male.as_feature(), 1);
        for sex in [Sex::Female, Sex::Male] {
            assert_eq!(Sex::from_label(sex.label()).unwrap(), sex);
        }
    }

    #[test]
    fn test_unknown_sex_label_rejected() {
        let result = Sex::from_label("Laki-laki");
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }

    #[test]
    fn test_builder_defaults_match_form_defaults() {
        let record = FeatureRecord::builder().build().unwrap();
        assert_eq!(record.cp, 2);
        assert_eq!(record.thalach, 80);
        assert_eq!(record.slope, 1);
        assert_eq!(record.oldpeak, 1.0);
        assert_eq!(record.exang, 1);
        assert_eq!(record.ca, 1);
        assert_eq!(record.thal, 1);
        assert_eq!(record.sex, Sex::Female);
        assert_eq!(record.age, 30);
    }

    #[test]
    fn test_row_follows_schema_order() {
        let record = FeatureRecord::builder()
            .cp(3)
            .thalach(190)
            .slope(2)
            .oldpeak(4.5)
            .exang(0)
            .ca(2)
            .thal(3)
            .sex(Sex::Male)
            .age(62)
            .build()
            .unwrap();
        let row = record.to_row();
        assert_eq!(row, [3.0, 190.0, 2.0, 4.5, 0.0, 2.0, 3.0, 1.0, 62.0]);
        assert_eq!(row.len(), FIELD_NAMES.len());
    }

    #[test]
    fn test_non_finite_oldpeak_rejected() {
        for oldpeak in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let result = FeatureRecord::builder().oldpeak(oldpeak).build();
            assert!(
                matches!(result, Err(ClassifierError::ValidationError(_))),
                "oldpeak {} unexpectedly accepted",
                oldpeak
            );
        }
    }

    #[test]
    fn test_chest_pain_descriptions_cover_bounds() {
        // 1..=3 each get a specific description, everything else the default.
        let default = chest_pain_description(0);
        assert_ne!(chest_pain_description(1), default);
        assert_ne!(chest_pain_description(2), default);
        assert_ne!(chest_pain_description(3), default);
        assert_eq!(chest_pain_description(4), default);
    }
}
