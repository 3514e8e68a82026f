use std::io::{Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::*;

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::object::Object;
use crate::util;

/// The object database: a directory tree keyed by identifier, with a
/// two-level fan-out (`objects/ab/cdef...`) to bound directory sizes.
///
/// Objects are immutable and content-addressed. Writes are idempotent and
/// never leave a partial file at the final path: the compressed bytes go to
/// a temporary file which is renamed into place.
#[derive(Debug)]
pub struct Database {
    pub database_root: Utf8PathBuf,
}

impl Database {
    pub fn new(git_folder: impl AsRef<Utf8Path>) -> Self {
        Self {
            database_root: git_folder.as_ref().join("objects"),
        }
    }

    /// Encode, hash, compress, and write an object, returning its
    /// identifier. A no-op success if the object is already present.
    pub fn store(&self, object: &Object) -> Result<Digest> {
        let content = object.encode();
        let oid = Digest::new(&content);
        trace!(oid = %oid.short(), kind = %object.kind(), "Writing object to database");

        let object_path = self.object_path(&oid);
        if object_path.exists() {
            return Ok(oid);
        }

        let dirname = object_path
            .parent()
            .expect("object path always has a fan-out parent");

        // create_dir_all treats an already-existing directory as success, so
        // racing writers cannot trip each other here.
        std::fs::create_dir_all(dirname)?;

        let temp_path = dirname.join(util::tmp_file_name());
        std::fs::write(&temp_path, compress(&content)?)?;
        std::fs::rename(&temp_path, &object_path)?;

        Ok(oid)
    }

    pub fn exists(&self, oid: &Digest) -> bool {
        self.object_path(oid).exists()
    }

    /// Read and decompress an object's canonical bytes, header included.
    pub fn read_to_vec(&self, oid: &Digest) -> Result<Vec<u8>> {
        trace!(oid = %oid.short(), "Reading object from database");

        let object_path = self.object_path(oid);
        if !object_path.exists() {
            return Err(Error::ObjectNotFound(oid.clone()));
        }

        let compressed = std::fs::read(object_path)?;
        decompress(&compressed)
    }

    pub fn load(&self, oid: &Digest) -> Result<Object> {
        Object::decode(&self.read_to_vec(oid)?)
    }

    fn object_path(&self, oid: &Digest) -> Utf8PathBuf {
        let mut path = self.database_root.clone();
        let oid = oid.to_hex();
        let (prefix, suffix) = oid.split_at(2);
        path.push(prefix);
        path.push(suffix);
        path
    }
}

/// Deflate `bytes` into a zlib stream.
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(bytes.len()), Compression::fast());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Inflate a zlib stream. Any inflate failure (bad header, truncation,
/// checksum mismatch) is reported as [`Error::CorruptStream`].
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(bytes);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(Error::CorruptStream)?;
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::object::Blob;

    fn test_database() -> Result<(TempDir, Database)> {
        let root = TempDir::new("casket-db")?;
        let path = Utf8PathBuf::from_path_buf(root.path().to_owned()).unwrap();
        let database = Database::new(path);
        Ok((root, database))
    }

    #[test]
    fn test_compress_roundtrip() -> Result<()> {
        let inputs: &[&[u8]] = &[b"", b"hello", &[0u8; 4096]];
        for input in inputs {
            assert_eq!(decompress(&compress(input)?)?, *input);
        }
        Ok(())
    }

    #[test]
    fn test_decompress_rejects_garbage() -> Result<()> {
        let err = decompress(b"not a zlib stream").unwrap_err();
        assert!(matches!(err, Error::CorruptStream(_)));

        // a valid stream truncated mid-way is corrupt, not empty
        let compressed = compress(b"some sample data, long enough to matter")?;
        let err = decompress(&compressed[..compressed.len() / 2]).unwrap_err();
        assert!(matches!(err, Error::CorruptStream(_)));

        Ok(())
    }

    #[test]
    fn test_store_load_roundtrip() -> Result<()> {
        let (_root, database) = test_database()?;

        let object = Object::Blob(Blob::new(b"hello".to_vec()));
        let oid = database.store(&object)?;
        assert_eq!(oid.to_hex(), "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0");

        assert!(database.exists(&oid));
        assert_eq!(database.load(&oid)?, object);

        Ok(())
    }

    #[test]
    fn test_store_is_idempotent() -> Result<()> {
        let (root, database) = test_database()?;

        let object = Object::Blob(Blob::new(b"hello".to_vec()));
        let first = database.store(&object)?;
        let on_disk = std::fs::read(
            root.path()
                .join("objects/b6/fc4c620b67d95f953a5c1c1230aaab5db5a1b0"),
        )?;

        let second = database.store(&object)?;
        assert_eq!(first, second);
        assert_eq!(
            std::fs::read(
                root.path()
                    .join("objects/b6/fc4c620b67d95f953a5c1c1230aaab5db5a1b0"),
            )?,
            on_disk
        );

        // no stray temporary files left behind
        let fan_out: Vec<_> = std::fs::read_dir(root.path().join("objects/b6"))?
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(fan_out.len(), 1);

        Ok(())
    }

    #[test]
    fn test_load_missing_object() -> Result<()> {
        let (_root, database) = test_database()?;

        let oid = Digest::new(b"no such object");
        assert!(!database.exists(&oid));
        let err = database.load(&oid).unwrap_err();
        assert!(matches!(err, Error::ObjectNotFound(_)));

        Ok(())
    }

    #[test]
    fn test_load_truncated_stream() -> Result<()> {
        let (_root, database) = test_database()?;

        let object = Object::Blob(Blob::new(b"some sample data, long enough to matter".to_vec()));
        let oid = database.store(&object)?;

        // corrupt the stored file by chopping off its tail
        let path = database.object_path(&oid);
        let bytes = std::fs::read(&path)?;
        std::fs::write(&path, &bytes[..bytes.len() / 2])?;

        let err = database.load(&oid).unwrap_err();
        assert!(matches!(err, Error::CorruptStream(_)));

        Ok(())
    }
}
