// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Smallest multiple of `of` that is at least `n`.
pub(crate) fn next_multiple(n: u64, of: u64) -> u64 {
	num_integer::Integer::div_ceil(&n, &of) * of
}

/// Solves the system `x ≡ residue (mod modulus)` for all pairs, returning `x` and
/// the product of the moduli. Returns `None` if any two moduli share a factor, or
/// if their product overflows.
pub(crate) fn chinese_remainder(congruences: &[(u64, u64)]) -> Option<(u64, u64)> {
	use {num_integer::Integer as _, num_modular::{ModularCoreOps as _, ModularUnaryOps as _}};

	congruences.iter().try_fold((0_u64, 1_u64), |(x, m), &(r, n)| {
		if n == 0 || m.gcd(&n) != 1 { return None }
		if n == 1 { return Some((x, m)) }
		let r = r % n;
		// Find `k` such that `x + m * k ≡ r (mod n)`
		let inv = (m % n).invm(&n)?;
		let k = r.subm(x % n, &n).mulm(inv, &n);
		let x = m.checked_mul(k)?.checked_add(x)?;
		Some((x, m.checked_mul(n)?))
	})
}


#[test]
fn tests() {
	assert_eq!(next_multiple(939, 59), 944);
	assert_eq!(next_multiple(944, 59), 944);
	assert_eq!(next_multiple(0, 7), 0);

	assert_eq!(chinese_remainder(&[]), Some((0, 1)));
	assert_eq!(chinese_remainder(&[(2, 3), (3, 5), (2, 7)]), Some((23, 105)));
	assert_eq!(chinese_remainder(&[(0, 17), (11, 13), (16, 19)]), Some((3417, 4199)));
	assert_eq!(chinese_remainder(&[(1, 4), (3, 6)]), None);
}
