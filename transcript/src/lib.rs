//! The Fiat-Shamir channel: a single hash-chain state plus an append-only
//! proof log. Every `send`/`get_random_scalar` call is a sequence point,
//! the order these are called in *is* the wire format (§4.4, §5).

#[cfg(test)]
mod tests;

use field::Fp;
use sha2::{Digest, Sha256};

/// Reduces the hex-digit string `s` modulo `modulus`, processing one nibble
/// at a time (`result = result*16 + digit (mod modulus)`), so it behaves
/// exactly like treating `s` as a base-16 integer regardless of its length
/// or leading zeros, including the initial state `"0"`.
fn hex_mod(s: &str, modulus: u64) -> u64 {
    s.chars().fold(0u64, |acc, c| {
        let digit = c.to_digit(16).expect("transcript state is always hex") as u64;
        (acc * 16 + digit) % modulus
    })
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// The Fiat-Shamir transcript state machine.
pub struct Transcript {
    state: String,
    proof_log: Vec<String>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Transcript {
            state: "0".to_string(),
            proof_log: Vec::new(),
        }
    }

    /// `s <- SHA256(s || msg)`; appends `"send:<msg>"` to the log.
    pub fn send(&mut self, msg: &str) {
        self.state = sha256_hex(&format!("{}{}", self.state, msg));
        self.proof_log.push(format!("send:{}", msg));
    }

    /// Convenience wrapper for sending a field element's decimal encoding.
    pub fn send_field_element(&mut self, value: Fp) {
        self.send(&value.to_decimal_string());
    }

    fn sample_int(&self, lo: u64, hi: u64) -> u64 {
        let range = hi - lo + 1;
        lo + hex_mod(&self.state, range)
    }

    /// `n <- lo + (int(s) mod (hi-lo+1))`, then `s <- SHA256(s)`. Logs
    /// `"receive_random_int:<n>"` when `show` is true.
    pub fn receive_random_int(&mut self, lo: u64, hi: u64, show: bool) -> u64 {
        let n = self.sample_int(lo, hi);
        self.state = sha256_hex(&self.state);
        if show {
            self.proof_log.push(format!("receive_random_int:{}", n));
        }
        n
    }

    /// Draws a uniform (biased, per §9) scalar challenge from the
    /// transcript. Equivalent to `receive_random_int(0, p-1, show=false)`
    /// but logs its own `"get_random_scalar:<n>"` tag instead.
    pub fn get_random_scalar(&mut self) -> Fp {
        let n = self.sample_int(0, Fp::MODULUS - 1);
        self.state = sha256_hex(&self.state);
        self.proof_log.push(format!("get_random_scalar:{}", n));
        Fp::new(n)
    }

    pub fn proof_log(&self) -> &[String] {
        &self.proof_log
    }

    pub fn into_proof_log(self) -> Vec<String> {
        self.proof_log
    }
}
