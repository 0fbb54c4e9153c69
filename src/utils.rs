/// Pop the least significant set bit and return its index.
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> u8 {
    debug_assert!(*bb != 0, "pop_lsb on empty bitboard");
    let idx = bb.trailing_zeros() as u8;
    *bb &= *bb - 1;
    idx
}

#[cfg(test)]
mod tests {
    use super::pop_lsb;

    #[test]
    fn pop_lsb_clears_lowest_bit() {
        let mut bb: u64 = 0b1010_0000;
        assert_eq!(pop_lsb(&mut bb), 5);
        assert_eq!(bb, 0b1000_0000);
        assert_eq!(pop_lsb(&mut bb), 7);
        assert_eq!(bb, 0);
    }
}
