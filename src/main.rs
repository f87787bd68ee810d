//! SerialMenu - Main entry point
//!
//! On the ESP32 target this wires the menu to the console UART, the
//! builtin LED and the internal RTC. On the host the same loop runs over
//! stdin/stdout so the menu can be exercised at a desk (note: terminals
//! are line buffered, so finish every entry with Enter).

#![cfg_attr(target_arch = "xtensa", no_std)]
#![cfg_attr(target_arch = "xtensa", no_main)]

#[cfg(target_arch = "xtensa")]
use esp_idf_svc::sys as esp_idf_sys;

#[cfg(target_arch = "xtensa")]
#[no_mangle]
fn main() {
    use core::fmt::Write;

    use rust_serial_menu::hal::serial::CONSOLE_UART;
    use rust_serial_menu::hal::{self, EspTicks, GpioLed, SystemClock, UartStream, UartWriter};
    use rust_serial_menu::{app, AppState, Context, EventLog, Menu, CONFIG, MENU_ENTRIES};

    // Initialize ESP-IDF
    esp_idf_sys::link_patches();

    hal::serial::install_driver(CONSOLE_UART);
    let mut stream = UartStream::new(CONSOLE_UART);
    let mut out = UartWriter::new(CONSOLE_UART);
    let mut clock = SystemClock;
    let ticks = EspTicks;
    let mut led = GpioLed::new(hal::led::LED_BUILTIN);

    let menu = match Menu::new(MENU_ENTRIES) {
        Ok(menu) => menu,
        Err(e) => {
            let _ = writeln!(out, "menu init failed: {}", e);
            loop {
                // nothing sensible left to do
                unsafe { esp_idf_sys::vTaskDelay(1000) };
            }
        }
    };

    let mut state = AppState::new();
    let mut log = EventLog::new();
    let mut ctx = Context {
        stream: &mut stream,
        out: &mut out,
        clock: &mut clock,
        state: &mut state,
        config: &CONFIG,
        menu: &menu,
        log: &mut log,
    };

    app::run(&mut ctx, &mut led, &ticks);
}

#[cfg(not(target_arch = "xtensa"))]
fn main() {
    host::run();
}

#[cfg(not(target_arch = "xtensa"))]
mod host {
    use std::collections::VecDeque;
    use std::io::{Read, Write as IoWrite};
    use std::sync::mpsc::{self, Receiver};
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use rust_serial_menu::clock::{Monotonic, WallClock};
    use rust_serial_menu::heartbeat::LedPin;
    use rust_serial_menu::serial::ByteStream;
    use rust_serial_menu::{app, AppState, Context, EventLog, Menu, CONFIG, MENU_ENTRIES};

    /// Stdin pumped through a channel so reads can carry a timeout.
    struct StdinStream {
        rx: Receiver<u8>,
        pending: VecDeque<u8>,
    }

    impl StdinStream {
        fn new() -> Self {
            let (tx, rx) = mpsc::channel();
            std::thread::spawn(move || {
                let mut stdin = std::io::stdin();
                let mut byte = [0u8; 1];
                while let Ok(1) = stdin.read(&mut byte) {
                    if tx.send(byte[0]).is_err() {
                        break;
                    }
                }
            });
            Self { rx, pending: VecDeque::new() }
        }

        fn pump(&mut self) {
            while let Ok(b) = self.rx.try_recv() {
                self.pending.push_back(b);
            }
        }
    }

    impl ByteStream for StdinStream {
        fn available(&mut self) -> bool {
            self.pump();
            if self.pending.is_empty() {
                // short wait instead of a hot idle spin
                if let Ok(b) = self.rx.recv_timeout(Duration::from_millis(1)) {
                    self.pending.push_back(b);
                }
            }
            !self.pending.is_empty()
        }

        fn read_byte(&mut self) -> Option<u8> {
            self.pump();
            self.pending.pop_front()
        }

        fn read_idle(&mut self, idle_ms: u32) -> Option<u8> {
            self.pump();
            if let Some(b) = self.pending.pop_front() {
                return Some(b);
            }
            self.rx.recv_timeout(Duration::from_millis(idle_ms as u64)).ok()
        }
    }

    struct StdoutWriter;

    impl core::fmt::Write for StdoutWriter {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(s.as_bytes());
            let _ = stdout.flush();
            Ok(())
        }
    }

    /// System time plus a settable offset stands in for the RTC.
    struct HostClock {
        offset: i64,
    }

    impl HostClock {
        fn system_now() -> i64 {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0)
        }
    }

    impl WallClock for HostClock {
        fn now_unix(&self) -> i64 {
            Self::system_now() + self.offset
        }

        fn set_unix(&mut self, secs: i64) {
            self.offset = secs - Self::system_now();
        }
    }

    struct HostTicks {
        start: Instant,
    }

    impl Monotonic for HostTicks {
        fn now_ms(&self) -> u64 {
            self.start.elapsed().as_millis() as u64
        }
    }

    /// No LED on a desk; track the state so the toggle still works.
    struct ConsoleLed {
        #[allow(dead_code)]
        on: bool,
    }

    impl LedPin for ConsoleLed {
        fn set(&mut self, on: bool) {
            self.on = on;
        }
    }

    pub fn run() -> ! {
        let menu = Menu::new(MENU_ENTRIES).expect("menu table has duplicate keys");

        let mut stream = StdinStream::new();
        let mut out = StdoutWriter;
        let mut clock = HostClock { offset: 0 };
        let ticks = HostTicks { start: Instant::now() };
        let mut led = ConsoleLed { on: false };

        let mut state = AppState::new();
        let mut log = EventLog::new();
        let mut ctx = Context {
            stream: &mut stream,
            out: &mut out,
            clock: &mut clock,
            state: &mut state,
            config: &CONFIG,
            menu: &menu,
            log: &mut log,
        };

        app::run(&mut ctx, &mut led, &ticks)
    }
}
