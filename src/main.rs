use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use chip8vm::display::{Display, MonoTermDisplay};
use chip8vm::input::{Input, StdinInput};
use chip8vm::interpreter::Chip8Interpreter;
use chip8vm::machine::{FRAME_HEIGHT, FRAME_WIDTH};
use chip8vm::sound::{Mute, SimpleBeep, Sound};

/// terminals report keydown only, so a pressed key stays down on the
/// keypad for this many cycles after its last event
const KEY_HOLD_CYCLES: u32 = 120;

#[derive(Parser, Debug)]
#[command(about = "CHIP-8 virtual machine in a terminal")]
struct Args {
    /// path to the ROM image
    rom: PathBuf,

    /// instruction cycles per second
    #[arg(short, long, default_value_t = 720)]
    speed: u32,

    /// disable the buzzer
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    // initialise
    let mut display = MonoTermDisplay::new(FRAME_WIDTH, FRAME_HEIGHT)?;
    let mut input = StdinInput::new();
    let mut sound: Box<dyn Sound> = if args.mute {
        Box::new(Mute::new())
    } else {
        Box::new(SimpleBeep::new())
    };
    let mut interpreter = Chip8Interpreter::new();

    // load a program
    let mut f = File::open(&args.rom)?;
    let size = interpreter.load_rom(&mut f)?;
    log::info!("loaded {} byte ROM from {}", size, args.rom.display());

    let period = Duration::from_secs_f64(1.0 / args.speed as f64);
    let mut held = [0u32; 16];

    let result = loop {
        // feed the keypad; a key counts as down until its hold runs out
        for &key in input.peek_keys()? {
            held[key as usize] = KEY_HOLD_CYCLES;
            interpreter.set_key(key, true);
        }
        input.flush_keys()?;
        for (key, hold) in held.iter_mut().enumerate() {
            if *hold > 0 {
                *hold -= 1;
                if *hold == 0 {
                    interpreter.set_key(key as u8, false);
                }
            }
        }

        if input.quit_requested() {
            break Ok(());
        }
        if input.reload_requested() {
            let mut f = File::open(&args.rom)?;
            interpreter.load_rom(&mut f)?;
            held = [0; 16];
            log::info!("reloaded {}", args.rom.display());
        }

        let cycle = match interpreter.step() {
            Ok(cycle) => cycle,
            Err(e) => break Err(e),
        };

        if interpreter.sound_active() {
            sound.beep()?;
        } else if cycle.tone {
            sound.stop()?;
        }

        if interpreter.redraw_needed() {
            display.draw(interpreter.framebuffer())?;
            interpreter.clear_redraw();
        }

        spin_sleep::sleep(period);
    };
    sound.stop()?;

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..12 {
        println!();
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("execution halted: {}", e);
            Err(e.into())
        }
    }
}
