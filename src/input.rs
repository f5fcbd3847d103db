use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// map of keyboard characters to the chip8's logical keypad, using the
/// left-hand side of a qwerty keyboard
const CHIP8_CONVENTIONAL_KEYMAP: [(char, u8); 16] = [
    ('x', 0x00), // x
    ('1', 0x01), // 1
    ('2', 0x02), // 2
    ('3', 0x03), // 3
    ('q', 0x04), // q
    ('w', 0x05), // w
    ('e', 0x06), // e
    ('a', 0x07), // a
    ('s', 0x08), // s
    ('d', 0x09), // d
    ('z', 0x0a), // z
    ('c', 0x0b), // c
    ('4', 0x0c), // 4
    ('r', 0x0d), // r
    ('f', 0x0e), // f
    ('v', 0x0f), // v
];

/// Input is the collaborator that feeds the machine's keypad. It reports
/// logical keys 0-15; the host turns those into keypad state. Emulator
/// controls (quit, reload) travel out of band so programs never see them.
pub trait Input {
    /// get a list of all the mapped keys that have been pressed recently,
    /// without flushing them from the buffer
    fn peek_keys(&mut self) -> Result<&[u8], io::Error>;

    /// flush all the keypresses from the buffer
    fn flush_keys(&mut self) -> Result<(), io::Error>;

    /// the user asked to leave the emulator
    fn quit_requested(&self) -> bool {
        false
    }

    /// the user asked to reload the ROM from scratch
    fn reload_requested(&mut self) -> bool {
        false
    }
}

/// simple implementation of Input, using STDIN
pub struct StdinInput {
    buffer: Vec<u8>,
    keymap: HashMap<char, u8>,
    quit: bool,
    reload: bool,
}

impl StdinInput {
    pub fn new() -> Self {
        terminal::enable_raw_mode().unwrap();
        StdinInput {
            buffer: Vec::new(),
            keymap: HashMap::from(CHIP8_CONVENTIONAL_KEYMAP),
            quit: false,
            reload: false,
        }
    }

    fn read_stdin(&mut self) -> Result<(), io::Error> {
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) => match evt.code {
                    KeyCode::Char(key) => match self.keymap.get(&key) {
                        Some(mapped_key) => self.buffer.push(*mapped_key),
                        None => {
                            log::warn!("can't map {:?} to a chip8 key", key);
                        }
                    },
                    KeyCode::Esc => self.quit = true,
                    KeyCode::F(1) => self.reload = true,
                    _ => {
                        log::warn!("unknown key event received");
                    }
                },
                _ => {
                    log::warn!("unknown event received");
                }
            }
        }
        Ok(())
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StdinInput {
    fn drop(&mut self) {
        terminal::disable_raw_mode().unwrap();
    }
}

impl Input for StdinInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        self.read_stdin()?;
        Ok(self.buffer.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.read_stdin()?;
        self.buffer.clear();
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }

    fn reload_requested(&mut self) -> bool {
        let asked = self.reload;
        self.reload = false;
        asked
    }
}

/// dummy Input implementation for testing
pub struct DummyInput {
    bytes: Vec<u8>,
}

impl DummyInput {
    pub fn new(keys: &[u8]) -> Self {
        DummyInput {
            bytes: Vec::from(keys),
        }
    }
}

impl Input for DummyInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        Ok(self.bytes.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.bytes.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_the_whole_keypad() {
        let mut keys: Vec<u8> = CHIP8_CONVENTIONAL_KEYMAP.iter().map(|&(_, k)| k).collect();
        keys.sort_unstable();
        assert_eq!(keys, (0x00..=0x0f).collect::<Vec<u8>>());
    }

    #[test]
    fn test_dummy_peek_then_flush() -> Result<(), io::Error> {
        let mut input = DummyInput::new(&[0x1, 0x2]);
        assert_eq!(input.peek_keys()?, &[0x1, 0x2]);
        assert_eq!(input.peek_keys()?, &[0x1, 0x2]);
        input.flush_keys()?;
        assert_eq!(input.peek_keys()?, &[] as &[u8]);
        Ok(())
    }

    #[test]
    fn test_dummy_never_asks_to_quit() {
        let mut input = DummyInput::new(&[]);
        assert!(!input.quit_requested());
        assert!(!input.reload_requested());
    }
}
