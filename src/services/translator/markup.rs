// Leitura de marcação inline estilo HTML (<b>, </i>, ...). O tradutor copia as
// tags como estão e só traduz o texto em volta delas.

pub struct RichSubstring {
    // Caracteres de texto puro, na caixa original.
    pub input: String,
    pub opening_tags: String,
    pub closing_tags: String,
    // Total de caracteres percorridos no texto, incluindo as tags.
    pub consumed: usize,
}

// Detecta uma tag começando em `start`. Retorna (tag, is_closing).
// Um segundo '<' antes do '>' ou texto que acaba sem '>' não forma tag:
// o span inteiro volta a ser tratado como texto comum.
pub fn tag_at(chars: &[char], start: usize) -> Option<(String, bool)> {
    if chars.get(start) != Some(&'<') {
        return None;
    }

    let is_closing = chars.get(start + 1) == Some(&'/');

    let mut tag = String::new();
    for (i, &c) in chars.iter().enumerate().skip(start) {
        tag.push(c);

        if c == '>' {
            return Some((tag, is_closing));
        }
        if i > start && c == '<' {
            return None;
        }
    }

    None
}

// Primeiro caractere real antes de `current`, andando de trás pra frente e pulando
// spans `>...<` inteiros. None = chegou no começo do texto.
pub fn previous_plain_char(chars: &[char], current: usize) -> Option<char> {
    let mut in_tag = false;
    for i in (0..current).rev() {
        let c = chars[i];
        if c == '>' {
            in_tag = true;
        } else if in_tag && c == '<' {
            in_tag = false;
        } else if !in_tag {
            return Some(c);
        }
    }

    None
}

// Primeiro caractere real a partir de `start`, pulando tags bem formadas.
// None = só restam tags até o fim do texto.
pub fn next_plain_char(chars: &[char], start: usize) -> Option<char> {
    let mut index = start;
    while index < chars.len() {
        match tag_at(chars, index) {
            Some((tag, _)) => index += tag.chars().count(),
            None => return Some(chars[index]),
        }
    }

    None
}

// Variante de substring que atravessa tags: junta `length` caracteres de texto puro
// e guarda as tags encontradas no caminho, separadas em abertura e fechamento.
pub fn rich_substring(chars: &[char], start: usize, length: usize) -> RichSubstring {
    let mut input = String::new();
    let mut opening_tags = String::new();
    let mut closing_tags = String::new();

    let mut index = start;
    let mut plain = 0usize;
    while plain < length && index < chars.len() {
        match tag_at(chars, index) {
            Some((tag, is_closing)) => {
                index += tag.chars().count();
                if is_closing {
                    closing_tags.push_str(&tag);
                } else {
                    opening_tags.push_str(&tag);
                }
            }
            None => {
                input.push(chars[index]);
                plain += 1;
                index += 1;
            }
        }
    }

    RichSubstring {
        input,
        opening_tags,
        closing_tags,
        consumed: index - start,
    }
}
