use std::io::Write;

use serde::Serialize;

use crate::{
    results::TfoResults,
    types::{FormattedPrediction, TfoError},
};

#[derive(Serialize)]
struct JsonRecord<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    sequence: &'a str,
    #[serde(rename = "pH")]
    ph: f64,
    tfo_conc: f64,
    dup_conc: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    prediction: Option<FormattedPrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a TfoResults> for JsonRecord<'a> {
    fn from(result: &'a TfoResults) -> Self {
        let (prediction, error) = match &result.prediction {
            Ok(prediction) => (Some(prediction.formatted()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            id: &result.record.header,
            description: result.record.description.as_deref(),
            sequence: &result.record.sequence,
            ph: result.conditions.ph(),
            tfo_conc: result.conditions.tfo_conc(),
            dup_conc: result.conditions.dup_conc(),
            prediction,
            error,
        }
    }
}

/// Write results as JSON lines
pub fn write_json_format<W: Write>(
    writer: &mut W,
    results: &[TfoResults],
) -> Result<(), TfoError> {
    for result in results {
        serde_json::to_writer(&mut *writer, &JsonRecord::from(result))?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        results::RecordInfo,
        types::{Conditions, DerivedQuantity, PredictionResult},
    };

    #[test]
    fn test_write_json_format_success() {
        let results = vec![TfoResults {
            record: RecordInfo {
                header: "tfo1".to_string(),
                description: Some("sample oligo".to_string()),
                sequence: "CUUCUCUCUUUUCCU".to_string(),
            },
            conditions: Conditions::new(7.2, 5.0, 10.0).unwrap(),
            prediction: Ok(PredictionResult {
                dh: -88.3,
                dg: -7.3,
                tm: 22.5,
                c50: 11.762,
            }),
        }];

        let mut buffer = Vec::new();
        write_json_format(&mut buffer, &results).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            concat!(
                r#"{"id":"tfo1","description":"sample oligo","sequence":"CUUCUCUCUUUUCCU","#,
                r#""pH":7.2,"tfo_conc":5.0,"dup_conc":10.0,"#,
                r#""prediction":{"DH":"-88.3","DG":"-7.3","Tm":"22.5","C50":"11.762"}}"#,
                "\n"
            )
        );
    }

    #[test]
    fn test_write_json_format_error() {
        let results = vec![TfoResults {
            record: RecordInfo {
                header: "hot".to_string(),
                description: None,
                sequence: "CU".to_string(),
            },
            conditions: Conditions::new(7.2, 5.0, 10.0).unwrap(),
            prediction: Err(TfoError::NumericDegeneracy {
                quantity: DerivedQuantity::C50,
                reason: "overflow".to_string(),
            }),
        }];

        let mut buffer = Vec::new();
        write_json_format(&mut buffer, &results).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["id"], "hot");
        assert_eq!(value["error"], "Undefined C50: overflow");
        assert!(value.get("prediction").is_none());
        assert!(value.get("description").is_none());
    }
}
