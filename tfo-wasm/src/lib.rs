use serde::{Deserialize, Serialize};
use tfo_core::config::{OutputFormat, TfoConfig};
use tfo_core::constants::{SAMPLE_DUP_CONC, SAMPLE_PH, SAMPLE_TFO_CONC};
use tfo_core::engine::{TfoAnalyzer, predict_str};
use tfo_core::output::write_results;
use tfo_core::types::Conditions;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct WasmTfoOptions {
    pub ph: f64,
    pub tfo_conc: f64, // uM
    pub dup_conc: f64, // uM
    pub format: String, // "text", "json", "tsv"
}

impl Default for WasmTfoOptions {
    fn default() -> Self {
        Self {
            ph: SAMPLE_PH,
            tfo_conc: SAMPLE_TFO_CONC,
            dup_conc: SAMPLE_DUP_CONC,
            format: "text".to_string(),
        }
    }
}

#[wasm_bindgen]
pub struct TfoBatchResult {
    output: String,
    record_count: usize,
    failed_count: usize,
}

#[wasm_bindgen]
impl TfoBatchResult {
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.output.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    #[wasm_bindgen(getter)]
    pub fn failed_count(&self) -> usize {
        self.failed_count
    }
}

/// Predicts one oligo and returns `{DH, DG, Tm, C50}` as strings.
#[wasm_bindgen]
pub fn predict(sequence: &str, ph: f64, tfo_conc: f64, dup_conc: f64) -> Result<JsValue, JsValue> {
    let prediction = predict_str(sequence, ph, tfo_conc, dup_conc)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&prediction)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn run_fasta_analysis(
    fasta_content: &str,
    options: &WasmTfoOptions,
) -> Result<TfoBatchResult, String> {
    let output_format: OutputFormat = options.format.parse().map_err(|e| format!("{}", e))?;
    let conditions = Conditions::new(options.ph, options.tfo_conc, options.dup_conc)
        .map_err(|e| e.to_string())?;

    let config = TfoConfig {
        output_format,
        quiet: true,
        num_threads: None,
    };
    let analyzer = TfoAnalyzer::new(config);
    let results = analyzer
        .analyze_fasta_str(fasta_content, conditions)
        .map_err(|e| format!("FASTA parsing error: {}", e))?;

    if results.is_empty() {
        return Err("No sequences found in FASTA input".to_string());
    }

    let mut output = Vec::new();
    write_results(&mut output, &results, analyzer.config.output_format)
        .map_err(|e| format!("Output error: {}", e))?;
    let output = String::from_utf8(output).map_err(|e| format!("UTF-8 error: {}", e))?;

    Ok(TfoBatchResult {
        output,
        record_count: results.len(),
        failed_count: results.iter().filter(|r| !r.is_success()).count(),
    })
}

/// Predicts every record of an uploaded FASTA file under shared conditions.
#[wasm_bindgen]
pub fn analyze_fasta(fasta_content: &str, options_js: JsValue) -> Result<TfoBatchResult, JsValue> {
    let options: WasmTfoOptions = serde_wasm_bindgen::from_value(options_js)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;

    run_fasta_analysis(fasta_content, &options).map_err(|e| JsValue::from_str(&e))
}
