//! Onboarding tutorial content for the lx CLI

/// Get the onboarding tutorial content
pub fn get_onboarding_content() -> &'static str {
    r#"WELCOME TO LX

lx evaluates boolean expressions. Every statement prints true or false.

STEP 1: LITERALS
----------------
  lx check 'true'
  => true

STEP 2: CONNECTIVES
-------------------
Every connective has a word form and a symbol form.

  lx check 'true and false'
  => false

  lx check 'true /\ false'
  => false

STEP 3: PREFIX OPERATORS
------------------------
  lx check 'not false'
  => true

  lx check '~~true'
  => true

STEP 4: CHAINS GROUP TO THE RIGHT
---------------------------------
There is no precedence between connectives. A chain groups from the right.

  lx check 'false implies false implies false'
  => true

  lx check '(false implies false) implies false'
  => false

STEP 5: SEVERAL STATEMENTS
--------------------------
Separate statements with ';;' or newlines.

  lx check 'false;;true'
  => false
  => true

  printf 'true\nfalse\n' | lx check
  => true
  => false

STEP 6: FILES AND JSON
----------------------
  lx check --file rules.lx
  lx check --json 'true;;false'
  => [true,false]

  lx check --ast --pretty 'not true'

NEXT STEPS
----------
  lx docs               List documentation categories
  lx doc operators      Every connective and its truth table
"#
}
