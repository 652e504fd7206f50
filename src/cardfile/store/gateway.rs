use super::backend::StorageBackend;
use crate::codec;
use crate::error::Result;
use crate::model::Contact;
use tracing::debug;

/// The only path between contacts and their backing storage.
///
/// `save` takes `&mut self`, so whoever owns the gateway decides how saves
/// are serialized; `RecordStore` keeps it behind its lock.
pub struct Gateway<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Gateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read and decode the stored cards. Nothing stored yet means no contacts.
    pub fn load(&self) -> Result<Vec<Contact>> {
        let location = self.backend.location();
        let Some(text) = self.backend.read_text()? else {
            debug!(location = %location.display(), "no contacts file yet, starting empty");
            return Ok(Vec::new());
        };
        let contacts = codec::decode(&text)?;
        debug!(location = %location.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    /// Encode and atomically replace the stored cards.
    pub fn save<'a, I>(&mut self, contacts: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        let text = codec::encode(contacts);
        self.backend.write_text(&text)?;
        let location = self.backend.location();
        debug!(location = %location.display(), bytes = text.len(), "saved contacts");
        Ok(())
    }
}
