//! Linear byte-addressable memory.
//!
//! This module implements the HX8's fixed 192-byte memory. It performs the
//! following:
//! 1. **Bounds Enforcement:** Every read and write is checked against the
//!    fixed address space; out-of-range access is a fault, the memory never
//!    grows.
//! 2. **Image Loading:** Installs a flat byte image starting at offset 0.
//! 3. **Presentation:** A hex-grid dump of the full address space for
//!    debugging.

use crate::common::addr::Addr;
use crate::common::constants::MEMORY_SIZE;
use crate::common::error::Fault;

/// Bytes shown per row in the memory dump.
const DUMP_ROW_WIDTH: usize = 16;

/// Fixed-size simulated memory.
#[derive(Clone, Debug)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a zeroed memory.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] for addresses at or beyond the
    /// end of memory.
    pub fn read(&self, addr: Addr) -> Result<u8, Fault> {
        self.cells
            .get(addr.index())
            .copied()
            .ok_or(Fault::AddressOutOfRange {
                addr: addr.index(),
                size: MEMORY_SIZE,
            })
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] for addresses at or beyond the
    /// end of memory.
    pub fn write(&mut self, addr: Addr, value: u8) -> Result<(), Fault> {
        match self.cells.get_mut(addr.index()) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Fault::AddressOutOfRange {
                addr: addr.index(),
                size: MEMORY_SIZE,
            }),
        }
    }

    /// Installs a program image at offset 0, zeroing the rest of memory.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ImageTooLarge`] if the image exceeds the memory
    /// size.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), Fault> {
        if image.len() > MEMORY_SIZE {
            return Err(Fault::ImageTooLarge {
                len: image.len(),
                size: MEMORY_SIZE,
            });
        }
        self.cells = [0; MEMORY_SIZE];
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the full memory contents as a read-only slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Dumps the memory contents to stdout as a hex grid.
    ///
    /// Each row shows the base address followed by sixteen byte cells in
    /// the machine's two-digit uppercase format.
    pub fn dump(&self) {
        for (row, chunk) in self.cells.chunks(DUMP_ROW_WIDTH).enumerate() {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
            println!("{:02X}: {}", row * DUMP_ROW_WIDTH, bytes.join(" "));
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
