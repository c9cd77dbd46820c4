pub trait IsEven
where
	Self: Sized,
{
	#[must_use]
	fn is_even(&self) -> bool;
}

pub trait IsOdd
where
	Self: Sized,
{
	#[must_use]
	fn is_odd(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
	Even,
	Odd,
}

pub trait HasParity: IsEven {
	#[must_use]
	fn parity(&self) -> Parity {
		if self.is_even() {
			Parity::Even
		} else {
			Parity::Odd
		}
	}
}

macro_rules! impl_parity_for {
	($t:ty) => {
		impl IsEven for $t {
			fn is_even(&self) -> bool {
				self & 1 == 0
			}
		}

		impl IsOdd for $t {
			fn is_odd(&self) -> bool {
				self & 1 == 1
			}
		}

		impl HasParity for $t {}
	};
	($t:ty, $($others:ty),+) => {
		impl_parity_for!($t);
		impl_parity_for!($($others),+);
	};
}

impl_parity_for!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn alternating() {
		let mut expected = Parity::Even;
		for n in 0_usize..100 {
			assert_eq!(n.parity(), expected, "{n}");
			assert_eq!(n.is_even(), expected == Parity::Even);
			assert_eq!(n.is_odd(), expected == Parity::Odd);
			expected = match expected {
				Parity::Even => Parity::Odd,
				Parity::Odd => Parity::Even,
			};
		}
	}

	#[test]
	fn large_values() {
		assert_eq!(u64::MAX.parity(), Parity::Odd);
		assert_eq!((u64::MAX - 1).parity(), Parity::Even);
	}
}
