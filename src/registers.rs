//! Register definitions for the ADXL362
//!
//! The ADXL362 exposes a flat 8-bit register map addressed through a
//! command-based SPI protocol (see [`crate::interface`]). Register addresses
//! auto-increment on the device during burst transfers, which the driver uses
//! to read the X/Y/Z data registers in one frame.

device_driver::create_device!(
    device_name: Adxl362,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// DEVID_AD - Analog Devices vendor ID (0x00, reset 0xAD)
        register DevIdAd {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// Vendor ID (should read 0xAD)
            device_id: uint = 0..8,
        },

        /// DEVID_MST - Analog Devices MEMS device ID (0x01, reset 0x1D)
        register DevIdMst {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            /// MEMS ID (should read 0x1D)
            mems_id: uint = 0..8,
        },

        /// PARTID - Part ID (0x02, reset 0xF2)
        register PartId {
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;

            /// Part ID (should read 0xF2)
            part_id: uint = 0..8,
        },

        /// REVID - Silicon revision (0x03)
        register RevId {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;

            /// Revision, incremented per silicon stepping
            revision: uint = 0..8,
        },

        /// XDATA - X-axis acceleration, 8 most significant bits (0x08)
        register XData {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            /// Signed X-axis sample
            data: uint = 0..8,
        },

        /// YDATA - Y-axis acceleration, 8 most significant bits (0x09)
        register YData {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;

            /// Signed Y-axis sample
            data: uint = 0..8,
        },

        /// ZDATA - Z-axis acceleration, 8 most significant bits (0x0A)
        register ZData {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;

            /// Signed Z-axis sample
            data: uint = 0..8,
        },

        /// STATUS - Latched status flags (0x0B)
        ///
        /// Reading this register clears the device's latched interrupt state
        /// (in the default linked/latched configuration).
        register Status {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;

            /// New sample available
            data_ready: bool = 0,
            /// At least one FIFO sample available
            fifo_ready: bool = 1,
            /// FIFO watermark reached
            fifo_watermark: bool = 2,
            /// FIFO has overrun
            fifo_overrun: bool = 3,
            /// Activity detected
            act: bool = 4,
            /// Inactivity detected
            inact: bool = 5,
            /// Awake (activity) state of the internal state machine
            awake: bool = 6,
            /// SEU error detected in a user register
            err_user_regs: bool = 7,
        },

        /// TEMP_L - Temperature, low byte (0x14)
        register TempL {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;

            /// Low 8 bits of the signed 12-bit temperature value
            temp_low: uint = 0..8,
        },

        /// TEMP_H - Temperature, high byte (0x15)
        register TempH {
            const ADDRESS = 0x15;
            const SIZE_BITS = 8;

            /// Sign-extended upper bits of the temperature value
            temp_high: uint = 0..8,
        },

        /// SOFT_RESET - Soft reset trigger (0x1F)
        ///
        /// Writing 0x52 ("R") resets the device to its power-on state.
        register SoftReset {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;

            /// Reset key; only 0x52 has an effect
            key: uint = 0..8,
        },

        /// THRESH_ACT_L - Activity threshold, low 8 bits (0x20)
        register ThreshActL {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            /// Bits 7:0 of the 11-bit activity threshold
            threshold_low: uint = 0..8,
        },

        /// THRESH_ACT_H - Activity threshold, high 3 bits (0x21)
        register ThreshActH {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// Bits 10:8 of the 11-bit activity threshold
            threshold_high: uint = 0..3,
            reserved: uint = 3..8,
        },

        /// TIME_ACT - Activity time, in samples (0x22)
        register TimeAct {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// Number of consecutive samples above threshold required
            time: uint = 0..8,
        },

        /// THRESH_INACT_L - Inactivity threshold, low 8 bits (0x23)
        register ThreshInactL {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// Bits 7:0 of the 11-bit inactivity threshold
            threshold_low: uint = 0..8,
        },

        /// THRESH_INACT_H - Inactivity threshold, high 3 bits (0x24)
        register ThreshInactH {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Bits 10:8 of the 11-bit inactivity threshold
            threshold_high: uint = 0..3,
            reserved: uint = 3..8,
        },

        /// TIME_INACT_L - Inactivity time, low byte (0x25)
        register TimeInactL {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;

            /// Bits 7:0 of the 16-bit inactivity time, in samples
            time_low: uint = 0..8,
        },

        /// TIME_INACT_H - Inactivity time, high byte (0x26)
        register TimeInactH {
            const ADDRESS = 0x26;
            const SIZE_BITS = 8;

            /// Bits 15:8 of the 16-bit inactivity time, in samples
            time_high: uint = 0..8,
        },

        /// ACT_INACT_CTL - Activity/inactivity detection control (0x27)
        register ActInactCtl {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// Enable activity detection
            act_enable: bool = 0,
            /// Referenced (true) or absolute (false) activity detection
            act_referenced: bool = 1,
            /// Enable inactivity detection
            inact_enable: bool = 2,
            /// Referenced (true) or absolute (false) inactivity detection
            inact_referenced: bool = 3,
            /// Link/loop mode (0 = default latched, 1 = linked, 3 = loop)
            link_loop: uint = 4..6,
            reserved: uint = 6..8,
        },

        /// INTMAP1 - INT1 pin function map (0x2A)
        ///
        /// Each bit routes the matching STATUS flag to the INT1 pin.
        register IntMap1 {
            const ADDRESS = 0x2A;
            const SIZE_BITS = 8;

            /// Map data-ready to INT1
            data_ready: bool = 0,
            /// Map FIFO-ready to INT1
            fifo_ready: bool = 1,
            /// Map FIFO watermark to INT1
            fifo_watermark: bool = 2,
            /// Map FIFO overrun to INT1
            fifo_overrun: bool = 3,
            /// Map activity detection to INT1
            act: bool = 4,
            /// Map inactivity detection to INT1
            inact: bool = 5,
            /// Map the awake state to INT1
            awake: bool = 6,
            /// INT1 active low
            int_low: bool = 7,
        },

        /// INTMAP2 - INT2 pin function map (0x2B)
        register IntMap2 {
            const ADDRESS = 0x2B;
            const SIZE_BITS = 8;

            /// Map data-ready to INT2
            data_ready: bool = 0,
            /// Map FIFO-ready to INT2
            fifo_ready: bool = 1,
            /// Map FIFO watermark to INT2
            fifo_watermark: bool = 2,
            /// Map FIFO overrun to INT2
            fifo_overrun: bool = 3,
            /// Map activity detection to INT2
            act: bool = 4,
            /// Map inactivity detection to INT2
            inact: bool = 5,
            /// Map the awake state to INT2
            awake: bool = 6,
            /// INT2 active low
            int_low: bool = 7,
        },

        /// FILTER_CTL - Range, bandwidth and output data rate (0x2C, reset 0x13)
        register FilterCtl {
            const ADDRESS = 0x2C;
            const SIZE_BITS = 8;

            /// Output data rate (0 = 12.5 Hz .. 5+ = 400 Hz)
            odr: uint = 0..3,
            /// Sample trigger on the INT2 pin
            ext_sample: bool = 3,
            /// Conservative (true, 1/4 ODR) or nominal (1/2 ODR) bandwidth
            half_bw: bool = 4,
            reserved: uint = 5..6,
            /// Measurement range (0 = +-2g, 1 = +-4g, 2 = +-8g)
            range: uint = 6..8,
        },

        /// POWER_CTL - Power and measurement control (0x2D)
        register PowerCtl {
            const ADDRESS = 0x2D;
            const SIZE_BITS = 8;

            /// Measurement mode (0b00 = standby, 0b10 = measurement)
            measure: uint = 0..2,
            /// Autosleep when inactivity is detected
            autosleep: bool = 2,
            /// Wake-up mode (sparse sampling)
            wakeup: bool = 3,
            /// Low noise mode (0 = normal, 1 = low, 2 = ultralow)
            low_noise: uint = 4..6,
            /// Run off an external clock on the INT1 pin
            ext_clk: bool = 6,
            reserved: uint = 7..8,
        },

        /// SELF_TEST - Electrostatic self-test (0x2E)
        register SelfTest {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;

            /// Apply the self-test force to the sensor
            self_test: bool = 0,
            reserved: uint = 1..8,
        },
    }
);
