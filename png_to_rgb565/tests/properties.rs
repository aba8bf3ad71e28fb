use png_to_rgb565::{ByteOrder, PixelSource, Rgb565, RgbGrid, pack, pack_words, unpack};
use proptest::prelude::*;

fn grids() -> impl Strategy<Value = RgbGrid> {
    (0u32..12, 0u32..12).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<[u8; 3]>(), (w * h) as usize)
            .prop_map(move |pixels| RgbGrid::new(w, h, pixels).unwrap())
    })
}

fn orders() -> impl Strategy<Value = ByteOrder> {
    any::<bool>().prop_map(ByteOrder::from_swap)
}

proptest! {
    #[test]
    fn word_matches_bit_formula(r: u8, g: u8, b: u8) {
        let expected = (((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3);
        prop_assert_eq!(Rgb565::from_rgb888(r, g, b).0, expected);
    }

    #[test]
    fn repacking_expanded_word_is_stable(word: u16) {
        let [r, g, b] = Rgb565(word).to_rgb888();
        prop_assert_eq!(Rgb565::from_rgb888(r, g, b), Rgb565(word));
    }

    #[test]
    fn output_is_two_bytes_per_pixel(grid in grids(), order in orders()) {
        let bytes = pack(&grid, order);
        prop_assert_eq!(bytes.len() as u64, grid.width() as u64 * grid.height() as u64 * 2);
    }

    #[test]
    fn words_follow_scan_order(grid in grids(), order in orders()) {
        let bytes = pack(&grid, order);
        for (i, chunk) in bytes.chunks_exact(2).enumerate() {
            let (x, y) = (i as u32 % grid.width(), i as u32 / grid.width());
            let [r, g, b] = grid.rgb_at(x, y);
            prop_assert_eq!(
                Rgb565::from_bytes([chunk[0], chunk[1]], order),
                Rgb565::from_rgb888(r, g, b)
            );
        }
    }

    #[test]
    fn swapped_stream_is_byte_reversed_per_word(grid in grids()) {
        let little = pack(&grid, ByteOrder::Little);
        let big = pack(&grid, ByteOrder::Big);
        for (l, b) in little.chunks_exact(2).zip(big.chunks_exact(2)) {
            prop_assert_eq!([l[1], l[0]], [b[0], b[1]]);
        }
    }

    #[test]
    fn unpacked_stream_repacks_identically(grid in grids(), order in orders()) {
        prop_assume!(grid.width() > 0);
        let bytes = pack(&grid, order);
        let image = unpack(&bytes, grid.width(), order).unwrap();
        prop_assert_eq!(pack(&image, order), bytes);
        prop_assert_eq!(pack_words(&image).count(), pack_words(&grid).count());
    }
}

#[test]
fn single_pixel_boundaries() {
    let white = RgbGrid::new(1, 1, vec![[255, 255, 255]]).unwrap();
    let black = RgbGrid::new(1, 1, vec![[0, 0, 0]]).unwrap();

    assert_eq!(pack_words(&white).collect::<Vec<_>>(), [Rgb565(0xFFFF)]);
    assert_eq!(pack_words(&black).collect::<Vec<_>>(), [Rgb565(0x0000)]);
}
