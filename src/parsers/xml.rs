use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::MetricsError;
use crate::models::{Confidence, ContextRecord, RiskLevel};

#[derive(Debug, Clone, Copy)]
enum AlertField {
    Name,
    Risk,
    Confidence,
}

/// Extracts a per-context record from a ZAP XML report.
///
/// Each `site` element counts one scanned target; each `alertitem` becomes
/// one alert entry. A malformed field inside an entry degrades that entry
/// (the code or name reads as absent); a document that does not parse as
/// XML at all is a hard failure for the whole artifact.
pub fn parse_report(content: &str) -> Result<ContextRecord, MetricsError> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut record = ContextRecord::default();
    let mut in_alert = false;
    let mut field: Option<AlertField> = None;
    let mut name: Option<String> = None;
    let mut risk: Option<RiskLevel> = None;
    let mut confidence: Option<Confidence> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"site" => record.urls_scanned += 1,
                b"alertitem" => {
                    in_alert = true;
                    name = None;
                    risk = None;
                    confidence = None;
                }
                b"name" if in_alert => field = Some(AlertField::Name),
                b"riskcode" if in_alert => field = Some(AlertField::Risk),
                b"confidence" if in_alert => field = Some(AlertField::Confidence),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"site" => record.urls_scanned += 1,
                b"alertitem" => record.record_alert(None, None, None),
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if let (Some(current), Ok(text)) = (field, t.unescape()) {
                    match current {
                        AlertField::Name => {
                            if name.is_none() {
                                name = Some(text.into_owned());
                            }
                        }
                        AlertField::Risk => {
                            if risk.is_none() {
                                risk = text.trim().parse::<i64>().ok().map(RiskLevel::from_code);
                            }
                        }
                        AlertField::Confidence => {
                            if confidence.is_none() {
                                confidence = text
                                    .trim()
                                    .parse::<i64>()
                                    .ok()
                                    .and_then(Confidence::from_code);
                            }
                        }
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"alertitem" => {
                    record.record_alert(name.take(), risk.take(), confidence.take());
                    in_alert = false;
                    field = None;
                }
                b"name" | b"riskcode" | b"confidence" => field = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(MetricsError::Xml(e)),
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"<?xml version="1.0"?>
<OWASPZAPReport version="2.14.0" generated="Thu, 20 Aug 2026 10:00:00">
  <site name="https://internal.example.com" host="internal.example.com">
    <alerts>
      <alertitem>
        <pluginid>40018</pluginid>
        <name>SQL Injection</name>
        <riskcode>3</riskcode>
        <confidence>2</confidence>
      </alertitem>
      <alertitem>
        <name>X-Frame-Options Header Not Set</name>
        <riskcode>2</riskcode>
        <confidence>3</confidence>
      </alertitem>
    </alerts>
  </site>
  <site name="https://internal-admin.example.com">
    <alerts>
      <alertitem>
        <riskcode>1</riskcode>
        <confidence>1</confidence>
      </alertitem>
    </alerts>
  </site>
</OWASPZAPReport>"#;

    #[test]
    fn test_parse_report_counts() {
        let record = parse_report(REPORT).unwrap();
        assert_eq!(record.urls_scanned, 2);
        assert_eq!(record.total_alerts, 3);
        assert_eq!(record.risk_distribution.high, 1);
        assert_eq!(record.risk_distribution.medium, 1);
        assert_eq!(record.risk_distribution.low, 1);
        assert_eq!(record.risk_distribution.info, 0);
        // The nameless alert is counted but carries no identity.
        assert_eq!(record.findings.len(), 2);
        assert_eq!(record.findings[0].name, "SQL Injection");
        assert_eq!(record.findings[0].risk, Some(RiskLevel::High));
        assert_eq!(record.findings[0].confidence, Some(Confidence::Medium));
    }

    #[test]
    fn test_parse_report_malformed_riskcode_degrades_entry() {
        let xml = r#"<site><alerts><alertitem>
            <name>Odd Entry</name><riskcode>not-a-number</riskcode>
        </alertitem></alerts></site>"#;
        let record = parse_report(xml).unwrap();
        assert_eq!(record.total_alerts, 1);
        assert_eq!(record.risk_distribution.total(), 0);
        assert_eq!(record.findings[0].risk, None);
    }

    #[test]
    fn test_parse_report_confidence_zero_not_counted() {
        let xml = r#"<site><alerts><alertitem>
            <name>User Agent Fuzzer</name><riskcode>0</riskcode><confidence>0</confidence>
        </alertitem></alerts></site>"#;
        let record = parse_report(xml).unwrap();
        assert_eq!(record.risk_distribution.info, 1);
        assert_eq!(record.confidence_distribution, Default::default());
        assert_eq!(record.findings[0].confidence, None);
    }

    #[test]
    fn test_parse_report_invalid_xml_is_hard_failure() {
        let xml = "<OWASPZAPReport><site><alerts></site></OWASPZAPReport>";
        assert!(parse_report(xml).is_err());
    }

    #[test]
    fn test_parse_report_empty_document() {
        let record = parse_report("<OWASPZAPReport></OWASPZAPReport>").unwrap();
        assert_eq!(record, ContextRecord::default());
    }

    #[test]
    fn test_parse_report_self_closing_site() {
        let record = parse_report(r#"<OWASPZAPReport><site name="a"/></OWASPZAPReport>"#).unwrap();
        assert_eq!(record.urls_scanned, 1);
        assert_eq!(record.total_alerts, 0);
    }
}
