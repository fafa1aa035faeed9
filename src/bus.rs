use log::warn;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::segment::{is_page_crossed, Segment};

/// A component that can be reset along with the rest of the machine.
///
/// Not every component lives at an address: a component that only
/// observes bus activity (a watcher, in the original machine's terms) still
/// needs to be reset, but has no `Segment` to register.
pub trait Component {
    fn name(&self) -> &str;

    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A component mapped to a contiguous range of the address space.
pub trait Addressable: Component {
    fn segment(&self) -> Segment;

    fn read(&mut self, address: u16) -> Result<u8>;
    fn write(&mut self, address: u16, value: u8) -> Result<()>;
}

/// The system bus: owns the clock and routes reads/writes to whichever
/// registered component's segment contains the target address.
///
/// Every bus transaction ticks the clock. `direct_read`/`direct_write` tick
/// once; `offset_read`/`offset_write` tick once unconditionally and once
/// more if the effective address crossed a page boundary (or `force_tick`
/// was requested, for read-modify-write addressing modes that always
/// re-read before writing).
pub struct Bus {
    clock: Clock,
    addressables: Vec<Box<dyn Addressable>>,
    watchers: Vec<Box<dyn Component>>,
}

impl Bus {
    pub fn new() -> Bus {
        Bus {
            clock: Clock::new(),
            addressables: Vec::new(),
            watchers: Vec::new(),
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn cycles(&self) -> u64 {
        self.clock.cycles()
    }

    /// Register a component that answers reads/writes within `segment`.
    /// Fails if the name is already registered, or the segment overlaps an
    /// already-registered addressable component.
    pub fn add_addressable(&mut self, component: Box<dyn Addressable>) -> Result<()> {
        self.check_name_available(component.name())?;
        let segment = component.segment();
        for existing in &self.addressables {
            if existing.segment().intersects(&segment) {
                return Err(Error::Overlap(component.name().to_string()));
            }
        }
        self.addressables.push(component);
        Ok(())
    }

    /// Register a component that observes bus activity without owning any
    /// address range (e.g. a reset hook with no storage of its own).
    pub fn add_watcher(&mut self, component: Box<dyn Component>) -> Result<()> {
        self.check_name_available(component.name())?;
        self.watchers.push(component);
        Ok(())
    }

    fn check_name_available(&self, name: &str) -> Result<()> {
        let taken = self.addressables.iter().any(|c| c.name() == name)
            || self.watchers.iter().any(|c| c.name() == name);
        if taken {
            warn!("component \"{}\" is already registered on the bus", name);
            return Err(Error::Duplicate(name.to_string()));
        }
        Ok(())
    }

    fn responder_for(&mut self, address: u16) -> Result<&mut Box<dyn Addressable>> {
        self.addressables
            .iter_mut()
            .find(|c| c.segment().contains(address))
            .ok_or(Error::NoResponder(address))
    }

    /// Read `address` directly, ticking the clock once.
    pub fn direct_read(&mut self, address: u16) -> Result<u8> {
        let value = self.responder_for(address)?.read(address)?;
        self.clock.tick()?;
        Ok(value)
    }

    /// Write `value` to `address` directly, ticking the clock once.
    pub fn direct_write(&mut self, address: u16, value: u8) -> Result<()> {
        self.responder_for(address)?.write(address, value)?;
        self.clock.tick()?;
        Ok(())
    }

    /// Read `base + offset`, ticking once unconditionally and once more if
    /// the addition crosses a page boundary or `force_tick` is set. Returns
    /// the value and the effective address that was read.
    pub fn offset_read(&mut self, base: u16, offset: u8, force_tick: bool) -> Result<(u8, u16)> {
        let address = base.wrapping_add(u16::from(offset));
        let value = self.responder_for(address)?.read(address)?;
        self.clock.tick()?;
        if force_tick || is_page_crossed(base, offset) {
            self.clock.tick()?;
        }
        Ok((value, address))
    }

    /// Write `value` to `base + offset`, with the same ticking rules as
    /// `offset_read`.
    pub fn offset_write(&mut self, base: u16, offset: u8, value: u8, force_tick: bool) -> Result<u16> {
        let address = base.wrapping_add(u16::from(offset));
        self.responder_for(address)?.write(address, value)?;
        self.clock.tick()?;
        if force_tick || is_page_crossed(base, offset) {
            self.clock.tick()?;
        }
        Ok(address)
    }

    /// Advance the clock by one cycle without touching any component,
    /// used for the dummy cycles the addressing engine spends on
    /// implied/accumulator access and taken branches.
    pub fn tick(&mut self) -> Result<()> {
        self.clock.tick()
    }

    /// Reset the clock, then every watcher, then every addressable
    /// component, mirroring registration order.
    pub fn reset(&mut self) -> Result<()> {
        self.clock.reset();
        for watcher in &mut self.watchers {
            watcher.reset()?;
        }
        for addressable in &mut self.addressables {
            addressable.reset()?;
        }
        Ok(())
    }

    /// Load `bytes` into consecutive addresses starting at `start_addr`,
    /// each write going through `direct_write` (and so ticking the clock).
    /// Fails if the block would run past the top of the address space.
    pub fn write_multiple(&mut self, bytes: &[u8], start_addr: u16) -> Result<()> {
        let end = u32::from(start_addr) + bytes.len() as u32;
        if end > 0x1_0000 {
            return Err(Error::NoResponder(start_addr));
        }
        for (i, byte) in bytes.iter().enumerate() {
            self.direct_write(start_addr + i as u16, *byte)?;
        }
        Ok(())
    }
}

impl Default for Bus {
    fn default() -> Bus {
        Bus::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRam {
        memory: [u8; 0x10000],
    }

    impl TestRam {
        fn new() -> TestRam {
            TestRam { memory: [0; 0x10000] }
        }
    }

    impl Component for TestRam {
        fn name(&self) -> &str {
            "RAM"
        }
    }

    impl Addressable for TestRam {
        fn segment(&self) -> Segment {
            Segment::new(0x0000, 0xFFFF)
        }

        fn read(&mut self, address: u16) -> Result<u8> {
            Ok(self.memory[address as usize])
        }

        fn write(&mut self, address: u16, value: u8) -> Result<()> {
            self.memory[address as usize] = value;
            Ok(())
        }
    }

    fn bus_with_ram() -> Bus {
        let mut bus = Bus::new();
        bus.add_addressable(Box::new(TestRam::new())).unwrap();
        bus
    }

    #[test]
    fn direct_read_and_write_round_trip_and_tick_once() {
        let mut bus = bus_with_ram();
        bus.direct_write(0x10, 0x42).unwrap();
        assert_eq!(bus.direct_read(0x10).unwrap(), 0x42);
        assert_eq!(bus.cycles(), 2);
    }

    #[test]
    fn unregistered_address_is_an_error() {
        let mut bus = Bus::new();
        assert_eq!(bus.direct_read(0x10), Err(Error::NoResponder(0x10)));
    }

    #[test]
    fn offset_read_ticks_twice_on_page_cross() {
        let mut bus = bus_with_ram();
        bus.direct_write(0x0200, 0x99).unwrap();
        let before = bus.cycles();
        let (value, address) = bus.offset_read(0x01FF, 0x01, false).unwrap();
        assert_eq!(value, 0x99);
        assert_eq!(address, 0x0200);
        assert_eq!(bus.cycles() - before, 2);
    }

    #[test]
    fn offset_read_ticks_once_without_page_cross() {
        let mut bus = bus_with_ram();
        let before = bus.cycles();
        bus.offset_read(0x0010, 0x01, false).unwrap();
        assert_eq!(bus.cycles() - before, 1);
    }

    #[test]
    fn offset_read_force_tick_always_ticks_twice() {
        let mut bus = bus_with_ram();
        let before = bus.cycles();
        bus.offset_read(0x0010, 0x01, true).unwrap();
        assert_eq!(bus.cycles() - before, 2);
    }

    #[test]
    fn overlapping_segments_are_rejected() {
        let mut bus = bus_with_ram();
        let err = bus.add_addressable(Box::new(TestRam::new())).unwrap_err();
        assert_eq!(err, Error::Overlap("RAM".to_string()));
    }

    #[test]
    fn duplicate_names_are_rejected_even_without_overlap() {
        struct Other;
        impl Component for Other {
            fn name(&self) -> &str {
                "RAM"
            }
        }
        let mut bus = bus_with_ram();
        let err = bus.add_watcher(Box::new(Other)).unwrap_err();
        assert_eq!(err, Error::Duplicate("RAM".to_string()));
    }

    #[test]
    fn write_multiple_loads_consecutive_bytes() {
        let mut bus = bus_with_ram();
        bus.write_multiple(&[0xA9, 0x01, 0x00], 0x0600).unwrap();
        assert_eq!(bus.direct_read(0x0600).unwrap(), 0xA9);
        assert_eq!(bus.direct_read(0x0601).unwrap(), 0x01);
        assert_eq!(bus.direct_read(0x0602).unwrap(), 0x00);
    }
}
