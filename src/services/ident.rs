use rand::{thread_rng, Rng};
use sha2::{Digest, Sha256};

// Gera o ID opaco de um idioma. O ID nasce no primeiro save e só muda num
// "salvar como": arquivo novo = identidade nova.
pub fn mint_id() -> String {
    let mut seed = [0u8; 16];
    thread_rng().fill(&mut seed);

    let mut hasher = Sha256::new();
    hasher.update(seed);
    let digest = hasher.finalize();

    hex::encode(&digest[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_opaque_hex() {
        let id = mint_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_do_not_repeat() {
        assert_ne!(mint_id(), mint_id());
    }
}
