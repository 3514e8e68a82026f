/// Raw file content. The store does not interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    #[test]
    /// Generate a blob with known contents. Ensure that the OID and the
    /// canonical encoding are as expected.
    fn test_blob_format() {
        let blob = Object::Blob(Blob::new(b"hello\n".to_vec()));
        assert_eq!(blob.encode(), b"blob 6\0hello\n");
        assert_eq!(
            blob.id().to_hex(),
            "ce013625030ba8dba906f756967f9e9ca394464a"
        );
    }

    #[test]
    fn test_blob_hello() {
        // `"hello"` is the reference fixture for determinism.
        let blob = Object::Blob(Blob::new(b"hello".to_vec()));
        assert_eq!(
            blob.id().to_hex(),
            "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"
        );
    }
}
