/// Character documents are keyed by a generated string id (UUID text).
pub type DocId = String;
