//! Ordered matching of logs against expected-event descriptors.

use crate::EventDescriptor;
use alloc::vec::Vec;
use alloy_primitives::Log;
use tracing::trace;

/// The outcome of [`match_sequence`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceMatch<'a> {
    /// Number of logs consumed from the front of the input, including logs skipped over by a
    /// required descriptor that failed to match.
    pub consumed: usize,
    /// Number of logs that matched a descriptor.
    pub matched: usize,
    /// Required descriptors that found no matching log, in declaration order.
    pub unmatched: Vec<&'a EventDescriptor>,
}

impl SequenceMatch<'_> {
    /// Returns `true` if every required descriptor was matched.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Matches `logs`, in order, against `descriptors`.
///
/// Two cursors walk the inputs. For each descriptor the log under the log cursor is tested:
///
/// - a required descriptor that matches consumes the log and is resolved;
/// - an optional descriptor that matches consumes the log and is tried again on the next log;
/// - an optional descriptor that does not match leaves the log in place and is resolved with
///   no matches;
/// - a required descriptor that does not match consumes the log and is reported as unmatched.
///
/// Once the logs run out, the remaining required descriptors are unmatched and the remaining
/// optional ones resolve with no matches. Matching is greedy and never backtracks: when two
/// consecutive descriptors both accept a log, the earlier one takes it.
pub fn match_sequence<'a>(logs: &[Log], descriptors: &'a [EventDescriptor]) -> SequenceMatch<'a> {
    let mut result = SequenceMatch::default();
    let mut descriptor_index = 0;

    while let Some(descriptor) = descriptors.get(descriptor_index) {
        let Some(log) = logs.get(result.consumed) else {
            result.unmatched.extend(descriptors[descriptor_index..].iter().filter(|d| !d.optional));
            break;
        };

        if descriptor.matches(log) {
            trace!(target: "events", event = %descriptor, log_index = result.consumed, "Matched");
            result.consumed += 1;
            result.matched += 1;
            if descriptor.optional {
                continue;
            }
        } else if !descriptor.optional {
            trace!(
                target: "events",
                event = %descriptor,
                log_index = result.consumed,
                "Required event not matched"
            );
            result.consumed += 1;
            result.unmatched.push(descriptor);
        }

        descriptor_index += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::raw_log;
    use alloc::{string::ToString, vec, vec::Vec};
    use alloy_primitives::{Address, B256, address};
    use rstest::rstest;

    const EMITTER: Address = address!("0x2e59A20f205bB85a89C53f1936454680651E618e");

    fn topic(tag: char) -> B256 {
        B256::repeat_byte(tag as u8)
    }

    /// Builds descriptors from tags; a trailing `?` marks a descriptor optional.
    fn descriptors(tags: &[&str]) -> Vec<EventDescriptor> {
        tags.iter()
            .map(|tag| {
                let name = tag.trim_end_matches('?');
                let descriptor =
                    EventDescriptor::new(name.to_string(), EMITTER, topic(name.chars().next().unwrap()));
                if tag.ends_with('?') { descriptor.optional() } else { descriptor }
            })
            .collect()
    }

    fn logs(tags: &str) -> Vec<Log> {
        tags.chars().map(|tag| raw_log(EMITTER, topic(tag))).collect()
    }

    fn names<'a>(unmatched: &[&'a EventDescriptor]) -> Vec<&'a str> {
        unmatched.iter().map(|d| d.name.as_ref()).collect()
    }

    #[rstest]
    #[case::exact(&["A", "B"], "AB", 2, 2, &[])]
    #[case::optional_zero(&["A", "B?", "C"], "AC", 2, 2, &[])]
    #[case::optional_one(&["A", "B?", "C"], "ABC", 3, 3, &[])]
    #[case::optional_many(&["A", "B?", "C"], "ABBBC", 5, 5, &[])]
    #[case::required_miss(&["A", "B"], "AX", 2, 1, &["B"])]
    #[case::leftover_not_consumed(&["A"], "AB", 1, 1, &[])]
    #[case::logs_exhausted(&["A", "B", "C?", "D"], "A", 1, 1, &["B", "D"])]
    #[case::no_logs(&["A?"], "", 0, 0, &[])]
    #[case::no_descriptors(&[], "AB", 0, 0, &[])]
    #[case::trailing_optional_many(&["A", "B?"], "ABB", 3, 3, &[])]
    #[case::miss_skips_log(&["A", "B", "C"], "AXC", 3, 2, &["B"])]
    fn test_match_sequence(
        #[case] expected: &[&str],
        #[case] observed: &str,
        #[case] consumed: usize,
        #[case] matched: usize,
        #[case] unmatched: &[&str],
    ) {
        let descriptors = descriptors(expected);
        let result = match_sequence(&logs(observed), &descriptors);

        assert_eq!(result.consumed, consumed);
        assert_eq!(result.matched, matched);
        assert_eq!(names(&result.unmatched), unmatched);
        assert_eq!(result.is_complete(), unmatched.is_empty());
    }

    #[test]
    fn test_greedy_first_descriptor_wins() {
        // Both descriptors accept `A`; the optional one swallows every `A` and leaves nothing for
        // the required one.
        let descriptors = descriptors(&["A?", "A"]);
        let result = match_sequence(&logs("AA"), &descriptors);

        assert_eq!(result.consumed, 2);
        assert_eq!(names(&result.unmatched), vec!["A"]);
    }

    #[test]
    fn test_address_mismatch_is_a_miss() {
        let descriptors = descriptors(&["A"]);
        let log = raw_log(Address::ZERO, topic('A'));
        let result = match_sequence(core::slice::from_ref(&log), &descriptors);

        assert_eq!(result.matched, 0);
        assert_eq!(names(&result.unmatched), vec!["A"]);
    }
}
