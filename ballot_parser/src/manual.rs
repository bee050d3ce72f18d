/*!

This is the long-form manual for `ballot_parser` and `ballot-reshape`.

## Input format

The input is the tab-separated export of a survey form. The first row is a
header and is discarded without being checked. Every other row is one
submission with the following columns, in this order:

| column        | content                                         |
|---------------|-------------------------------------------------|
| `timestamp`   | copied as-is to the output                      |
| `first-team`  | the selections of the first category            |
| `second-team` | the selections of the second category, optional |
| `comments`    | ignored                                         |

The selections of a category are separated by a comma and a space (`, `).
Each selection is a descriptor like `ABC - Foo (DPS)`:
- the group code is the 3 or 4 uppercase letters at the start (`ABC`)
- the handle is the first word following `- ` and followed by a space (`Foo`)
- the role tag is made of uppercase letters and `/`, in parentheses at the
  very end (`DPS`, `TANK/SUPP`)

A descriptor that does not follow these rules stops the whole run. Nothing is
written in that case.

## Double votes

If the same descriptor (character for character) is found in both categories,
the submission is spoiled. None of its selections are kept, and it is counted
in the summary. A submission with both categories empty is also spoiled.

## Output format

A tab-separated file with the header `timestamp player team role selection`,
then one row per selection. `selection` is either `first_team` or
`second_team`. Rows follow the order of the input: submissions in file order,
first category before second category, selections in the order they were
written.

```text
timestamp	player	team	role	selection
2019/05/01 12:00:00	Foo	ABC	DPS	first_team
2019/05/01 12:00:00	Bar	XYZ	TANK/SUPP	second_team
```

## Running

```bash
ballot-reshape votes.tsv votes_long.tsv
```

The summary is printed at the end:

```text
2 votes cast over 1 submissions 0 ballots were spoiled (double votes)
```

Use `-` as the output path to write the rows to the standard output. Set
`RUST_LOG=debug` to follow the processing of each submission.

*/
