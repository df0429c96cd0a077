use dtekv::display::Displays;
use dtekv::input::{Button, Switches};
use dtekv::leds::{LedMask, Leds};
use dtekv::vga::Framebuffer;
use snake_core::{BOARD_SIZE, Frontend, Inputs, Paint, Position, Signal};

/// 8-bit VGA colours.
const fn color(paint: Paint) -> u8 {
    match paint {
        Paint::Empty => 0x00,
        Paint::Head => 0x56,
        Paint::Body => 0x21,
        Paint::Food => 0xCC,
    }
}

/// The board peripherals the game loop draws on and samples.
pub struct Hardware {
    leds: &'static mut Leds,
    displays: &'static mut Displays,
    vga: Framebuffer<'static>,
    switches: &'static Switches,
    button: &'static Button,
}

impl Hardware {
    pub fn new(
        leds: &'static mut Leds,
        displays: &'static mut Displays,
        mut vga: Framebuffer<'static>,
        switches: &'static Switches,
        button: &'static Button,
    ) -> Self {
        vga.clear(color(Paint::Empty));
        displays.blank();
        Hardware {
            leds,
            displays,
            vga,
            switches,
            button,
        }
    }
}

impl Frontend for Hardware {
    #[inline(always)]
    fn draw_cell(&mut self, pos: Position, paint: Paint) {
        self.vga
            .fill_cell(pos.row as usize, pos.col as usize, BOARD_SIZE, color(paint));
    }

    #[inline(always)]
    fn set_digit(&mut self, index: u8, value: u8) {
        self.displays.show(index as usize, value);
    }

    fn signal(&mut self, signal: Signal) {
        let pattern = match signal {
            Signal::Idle => LedMask::empty(),
            Signal::Won => LedMask::ALTERNATE,
            Signal::Lost => LedMask::ALL,
        };
        self.leds.set(pattern);
    }
}

impl Inputs for Hardware {
    #[inline(always)]
    fn read_switches(&self) -> u16 {
        self.switches.read()
    }

    #[inline(always)]
    fn read_button(&self) -> bool {
        self.button.is_pressed()
    }
}
