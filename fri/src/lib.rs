//! FRI prover: commit phase (fold + Merkle-commit each layer) and decommit
//! phase (open queried indices with siblings across layers), §4.6.

pub mod error;

use domain::BLOWUP_FACTOR;
use field::Fp;
use merkle_tree::MerkleTree;
use polynomial::Polynomial;
use transcript::Transcript;

pub use error::FriError;

/// Number of decommit queries per proof.
pub const QUERIES_NUM: usize = 3;

/// One step of the FRI ladder: the polynomial at this layer, its evaluation
/// domain, the resulting codeword, and the Merkle tree committing to it.
/// Held together because decommit consumes all four in lockstep; the layer
/// index in the enclosing `Vec` is the layer number (§4.6 design notes).
pub struct FriLayer {
    pub poly: Polynomial,
    pub domain: Vec<Fp>,
    pub codeword: Vec<Fp>,
    pub merkle: MerkleTree,
}

/// Splits `poly`'s coefficients into even- and odd-indexed halves `E`, `O`
/// and returns `E + beta*O`, i.e. one fold step of the split-and-fold
/// recurrence (§4.6 point 2b).
fn fold(poly: &Polynomial, beta: Fp) -> Polynomial {
    let coeffs = poly.coeffs();
    let even: Vec<Fp> = coeffs.iter().step_by(2).copied().collect();
    let odd: Vec<Fp> = coeffs.iter().skip(1).step_by(2).copied().collect();
    Polynomial::new(even).add(&Polynomial::new(odd).scale(beta))
}

/// Commit phase: repeatedly folds `poly` over `domain`, committing each
/// intermediate codeword with a Merkle tree and sending its root on
/// `transcript`, until the polynomial is constant. Sends that final
/// constant's decimal encoding once the loop ends (§4.6 point 3).
pub fn commit(
    mut poly: Polynomial,
    mut domain: Vec<Fp>,
    transcript: &mut Transcript,
) -> Result<Vec<FriLayer>, FriError> {
    let mut layers = Vec::new();

    loop {
        let codeword = poly.evaluate_many(&domain);
        let merkle = MerkleTree::build(&codeword)?;
        transcript.send(merkle.root());

        let is_constant = poly.degree().map_or(true, |d| d == 0);

        layers.push(FriLayer {
            poly: poly.clone(),
            domain: domain.clone(),
            codeword,
            merkle,
        });

        if is_constant {
            break;
        }

        let beta = transcript.get_random_scalar();
        let next_poly = fold(&poly, beta);
        let half = domain.len() / 2;
        let next_domain: Vec<Fp> = domain[..half].iter().map(|&x| x * x).collect();

        poly = next_poly;
        domain = next_domain;
    }

    let constant = layers
        .last()
        .expect("commit always produces at least one layer")
        .poly
        .coeffs()
        .first()
        .copied()
        .unwrap_or_else(Fp::zero);
    transcript.send_field_element(constant);

    Ok(layers)
}

/// Decommit phase for a single query: derives the query index from
/// `transcript`, opens the three trace-triple points on the composition
/// codeword, then walks every layer opening the queried index and its
/// antipode, finishing with the final layer's constant (§4.6 decommit
/// phase, points 1-4).
fn decommit_query(layers: &[FriLayer], transcript: &mut Transcript) -> Result<(), FriError> {
    let e0_len = layers[0].codeword.len();
    if e0_len <= 2 * BLOWUP_FACTOR + 1 {
        return Err(FriError::DomainTooSmall(e0_len));
    }
    let modulus = (e0_len - 2 * BLOWUP_FACTOR - 1) as u64;

    let mut idx = (transcript.get_random_scalar().value() % modulus) as usize;

    for offset in [0, BLOWUP_FACTOR, 2 * BLOWUP_FACTOR] {
        let i = idx + offset;
        transcript.send_field_element(layers[0].codeword[i]);
        let path = layers[0].merkle.authentication_path(i)?;
        transcript.send(&merkle_tree::encode_path(&path));
    }

    let last = layers.len() - 1;
    for layer in &layers[..last] {
        let len = layer.codeword.len();
        idx %= len;

        transcript.send_field_element(layer.codeword[idx]);
        let path = layer.merkle.authentication_path(idx)?;
        transcript.send(&merkle_tree::encode_path(&path));

        let sidx = (idx + len / 2) % len;
        transcript.send_field_element(layer.codeword[sidx]);
        let spath = layer.merkle.authentication_path(sidx)?;
        transcript.send(&merkle_tree::encode_path(&spath));
    }

    transcript.send_field_element(layers[last].codeword[0]);

    Ok(())
}

/// Runs the commit phase over `composition_poly`/`domain`, then
/// [`QUERIES_NUM`] decommit queries, returning the committed layers (kept
/// around so a caller can serialize the full proof transcript alongside
/// them if it wants to, though the transcript's own proof log is already
/// the canonical record, §4.6).
pub fn prove(
    composition_poly: Polynomial,
    domain: Vec<Fp>,
    transcript: &mut Transcript,
) -> Result<Vec<FriLayer>, FriError> {
    let layers = commit(composition_poly, domain, transcript)?;
    for _ in 0..QUERIES_NUM {
        decommit_query(&layers, transcript)?;
    }
    Ok(layers)
}
