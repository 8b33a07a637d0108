// A record for sequences, consisting of some description and a raw sequence. Meant to be
// format-agnostic - should work for FastA, Stockholm, GenBank, etc - though in the last cases it
// won't contain annotations. This is what format adapters produce and consume; the header is
// parsed into id, segments etc. only when the record becomes a Sequence.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}
