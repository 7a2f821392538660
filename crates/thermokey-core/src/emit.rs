//! Synthetic key emission through a virtual uinput keyboard.

use std::io;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, BusType, EventType, InputEvent, InputId, Key};

use crate::error::{Error, Result};
use crate::hysteresis::KeyEdge;

/// Name the virtual device registers under.
pub const DEVICE_NAME: &str = "thermokey";

/// The one key the device exposes. Left-Ctrl is a modifier, so holding it
/// synthetically is harmless on its own and easy for downstream macro
/// tooling to bind against.
pub const HELD_KEY: Key = Key::KEY_LEFTCTRL;

/// Anything that can realize a key edge. The poll driver talks to this seam
/// so tests can record edges without a kernel device.
pub trait KeyEmitter {
    fn emit(&mut self, edge: KeyEdge) -> io::Result<()>;
}

/// A registered uinput keyboard exposing exactly [`HELD_KEY`].
///
/// Registration happens once before the poll loop; the kernel destroys the
/// device when this value is dropped, on every exit path.
pub struct UinputKeyEmitter {
    device: VirtualDevice,
}

impl UinputKeyEmitter {
    /// Register the virtual device. Requires write access to `/dev/uinput`;
    /// failure is fatal to the caller, since the daemon would otherwise have
    /// no way to act on spikes.
    pub fn register() -> Result<Self> {
        let device = build_device().map_err(Error::DeviceRegistrationFailed)?;
        Ok(Self { device })
    }
}

fn build_device() -> io::Result<VirtualDevice> {
    let mut keys = AttributeSet::<Key>::new();
    keys.insert(HELD_KEY);

    VirtualDeviceBuilder::new()?
        .name(DEVICE_NAME)
        .input_id(InputId::new(BusType::BUS_USB, 0x1, 0x1, 0x1))
        .with_keys(&keys)?
        .build()
}

impl KeyEmitter for UinputKeyEmitter {
    fn emit(&mut self, edge: KeyEdge) -> io::Result<()> {
        let value = match edge {
            KeyEdge::Press => 1,
            KeyEdge::Release => 0,
        };
        // emit() follows the batch with a SYN_REPORT, so consumers see the
        // key event and the sync as one atomic pair.
        self.device
            .emit(&[InputEvent::new(EventType::KEY, HELD_KEY.code(), value)])
    }
}
