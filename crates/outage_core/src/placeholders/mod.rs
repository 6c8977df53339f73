use crate::domain::Outage;
use crate::format::OutageFormatter;

/// Tokens recognised in outage titles and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Start,
    Stop,
    Duration,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Placeholder::Start, Placeholder::Stop, Placeholder::Duration];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Start => "{{start}}",
            Placeholder::Stop => "{{stop}}",
            Placeholder::Duration => "{{duration}}",
        }
    }

    /// Replacement for this token; empty when the backing field is unknown.
    fn value(self, outage: &Outage, formatter: &impl OutageFormatter) -> String {
        let rendered = match self {
            Placeholder::Start => outage.starttime.map(|ts| formatter.format_timestamp(ts)),
            Placeholder::Stop => outage.stoptime.map(|ts| formatter.format_timestamp(ts)),
            Placeholder::Duration => outage
                .get_duration()
                .map(|secs| formatter.format_duration(secs)),
        };
        rendered.unwrap_or_default()
    }
}

/// Literal replacement of every placeholder occurrence in `text`.
///
/// Single pass over the input: substituted values are never scanned again, so a
/// formatter output that happens to contain a token is left as-is.
pub fn render_placeholders(text: &str, outage: &Outage, formatter: &impl OutageFormatter) -> String {
    let values: Vec<(&str, String)> = Placeholder::ALL
        .iter()
        .map(|p| (p.token(), p.value(outage, formatter)))
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(pos) = rest.find("{{") {
        let (before, candidate) = rest.split_at(pos);
        out.push_str(before);
        for (token, value) in &values {
            if let Some(after) = candidate.strip_prefix(*token) {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        out.push('{');
        rest = &candidate[1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl OutageFormatter for Echo {
        fn format_timestamp(&self, timestamp: i64) -> String {
            format!("<{timestamp}>")
        }

        fn format_duration(&self, seconds: i64) -> String {
            format!("{{{{start}}}}{seconds}s")
        }
    }

    fn outage() -> Outage {
        Outage {
            starttime: Some(1000),
            stoptime: Some(4600),
            ..Outage::default()
        }
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = render_placeholders("{{start}}-{{stop}} {{start}}", &outage(), &Echo);
        assert_eq!(out, "<1000>-<4600> <1000>");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let out = render_placeholders("took {{duration}}", &outage(), &Echo);
        assert_eq!(out, "took {{start}}3600s");
    }

    #[test]
    fn unknown_and_partial_tokens_pass_through() {
        let out = render_placeholders("{{nope}} {{ {{{stop}}", &outage(), &Echo);
        assert_eq!(out, "{{nope}} {{ {<4600>");
    }

    #[test]
    fn unset_fields_render_empty() {
        let out = render_placeholders("[{{start}}|{{duration}}]", &Outage::default(), &Echo);
        assert_eq!(out, "[|]");
    }
}
