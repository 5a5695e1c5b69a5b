//! Instruction template wrapped around the combined transcript.

const TEMPLATE_HEAD: &str = "\
You are a senior network engineer specialising in Huawei switching. Review the \
inspection output below, collected from one or more switches, and produce a \
complete health assessment.

Requirements (follow strictly):
1. Open with a single sentence summarising the overall health of all devices.
2. Then, device by device, list every anomaly or risk found. If a device has \
none, write \"no notable anomalies found\".
3. For every anomaly, give the likely cause and the recommended remedy.
4. Finish with overall optimisation advice (firmware upgrades, configuration \
tuning, hardware recommendations).
5. Output standard Markdown and write the entire report in Simplified Chinese, \
in plain language. Emoji are welcome.

Inspection output:
";

const TEMPLATE_TAIL: &str = "\n\nBegin the analysis:\n";

/// Embed the combined transcript in the analysis instructions.
#[must_use]
pub fn build_prompt(combined_transcript: &str) -> String {
    let mut prompt =
        String::with_capacity(TEMPLATE_HEAD.len() + combined_transcript.len() + TEMPLATE_TAIL.len());
    prompt.push_str(TEMPLATE_HEAD);
    prompt.push_str(combined_transcript);
    prompt.push_str(TEMPLATE_TAIL);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_is_embedded_between_instructions() {
        let prompt = build_prompt("--- Device: sw1 (10.0.0.1) ---\nCPU 5%");
        let head = prompt.find("Inspection output:").unwrap();
        let body = prompt.find("CPU 5%").unwrap();
        let tail = prompt.find("Begin the analysis:").unwrap();
        assert!(head < body && body < tail);
        assert!(prompt.contains("Simplified Chinese"));
    }
}
